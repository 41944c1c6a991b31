//! Geordnete Punktsequenz einer Kurve.
//!
//! Das Modell hält die flache Liste typisierter Punkte (Joint | Control) und
//! erzwingt beim Einfügen die feste Anordnung `J, C, (J, C)*`: ab dem zweiten
//! angehängten Punkt wird vor jedem neuen Control ein Joint am Mittelpunkt
//! zwischen dem bisherigen letzten Punkt und der neuen Position synthetisiert.
//! Der allererste angehängte Punkt (Index 1) bleibt ein nackter Control —
//! Index 0 dient bereits als Start-Joint. Diese Asymmetrie ist beabsichtigt.

use super::point::CurvePoint;
use glam::Vec2;


/// Punktsequenz einer Kurve mit optionalem Vorschau-Schwanz.
#[derive(Debug, Clone, Default)]
pub struct PointModel {
    points: Vec<CurvePoint>,
}

impl PointModel {
    /// Erstellt ein Modell mit dem festen Start-Joint.
    pub fn new(start: Vec2) -> Self {
        Self {
            points: vec![CurvePoint::joint(start)],
        }
    }

    /// Alle Punkte inklusive Vorschau-Schwanz.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Anzahl aller Punkte inklusive Vorschau-Schwanz.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True wenn das Modell keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Anzahl der dauerhaften Punkte (ohne Vorschau-Schwanz).
    pub fn durable_len(&self) -> usize {
        self.points.iter().filter(|p| !p.provisional).count()
    }

    /// Liest einen Punkt (inklusive Vorschau-Punkte).
    pub fn get(&self, index: usize) -> Option<&CurvePoint> {
        self.points.get(index)
    }

    /// Setzt die Position eines Punkts. Außerhalb des Bereichs: No-op.
    pub fn set_position(&mut self, index: usize, position: Vec2) {
        if let Some(point) = self.points.get_mut(index) {
            point.position = position;
        }
    }

    /// Verwirft den Vorschau-Schwanz.
    fn drop_provisional(&mut self) {
        self.points.retain(|p| !p.provisional);
    }

    /// Hängt einen dauerhaften Punkt an.
    ///
    /// Ab ≥2 vorhandenen Punkten wird zuerst ein Joint am Mittelpunkt
    /// zwischen dem letzten Punkt und `pos` synthetisiert, dann `pos` als
    /// Control angehängt. Darunter wird `pos` direkt als Control angehängt.
    pub fn append_durable(&mut self, pos: Vec2) {
        self.drop_provisional();

        if self.points.len() >= 2 {
            let last = self.points[self.points.len() - 1].position;
            self.points.push(CurvePoint::joint(last.midpoint(pos)));
        }

        self.points.push(CurvePoint::control(pos));
    }

    /// Ersetzt den Vorschau-Schwanz durch eine Vorschau auf "Klick bei `pos`".
    ///
    /// Gleiche Mittelpunkt-Synthese wie [`append_durable`](Self::append_durable),
    /// aber beide neuen Punkte sind als `provisional` markiert. No-op auf
    /// leerem Modell. Dauerhafte Punkte werden nie verändert.
    pub fn set_provisional_tail(&mut self, pos: Vec2) {
        if self.points.is_empty() {
            return;
        }
        self.drop_provisional();

        if self.points.len() >= 2 {
            let last = self.points[self.points.len() - 1].position;
            self.points
                .push(CurvePoint::joint(last.midpoint(pos)).as_provisional());
        }

        self.points.push(CurvePoint::control(pos).as_provisional());
    }

    /// Verwirft den Vorschau-Schwanz und meldet, ob ≥2 dauerhafte Punkte
    /// übrig sind (Aufrufer entscheidet damit über Behalten vs. Verwerfen).
    pub fn finalize(&mut self) -> bool {
        self.drop_provisional();
        self.points.len() >= 2
    }
}
