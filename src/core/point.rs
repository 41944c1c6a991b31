//! Punkt-Typen für das Kurven-Modell.

use glam::Vec2;

/// Rolle eines Punkts innerhalb der Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    /// Durchgangspunkt: die Kurve läuft durch ihn hindurch
    Joint,
    /// Steuerpunkt: formt das quadratische Segment
    /// (im Linien-Modus ebenfalls Durchgangspunkt)
    Control,
}

/// Einzelner Punkt einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Position in Canvas-Koordinaten
    pub position: Vec2,
    /// Joint oder Control
    pub kind: PointKind,
    /// Vorschau-Punkt: existiert nur solange der Zeiger sich bewegt,
    /// wird vor jeder dauerhaften Mutation verworfen
    pub provisional: bool,
}

impl CurvePoint {
    /// Erstellt einen dauerhaften Joint-Punkt.
    pub fn joint(position: Vec2) -> Self {
        Self {
            position,
            kind: PointKind::Joint,
            provisional: false,
        }
    }

    /// Erstellt einen dauerhaften Control-Punkt.
    pub fn control(position: Vec2) -> Self {
        Self {
            position,
            kind: PointKind::Control,
            provisional: false,
        }
    }

    /// Markiert den Punkt als Vorschau-Punkt.
    pub fn as_provisional(mut self) -> Self {
        self.provisional = true;
        self
    }

    /// True wenn der Punkt ein Joint ist.
    pub fn is_joint(&self) -> bool {
        self.kind == PointKind::Joint
    }

    /// True wenn der Punkt ein Control ist.
    pub fn is_control(&self) -> bool {
        self.kind == PointKind::Control
    }
}
