//! Pfad-Rekonstruktion aus der Punktsequenz.
//!
//! Reine Funktionen ohne UI-Abhängigkeiten: identische Punktsequenzen
//! liefern identische Segmentlisten, der Pfad wird jedes Frame komplett
//! neu abgeleitet und nie gespeichert.

use super::point::CurvePoint;
use glam::Vec2;
use std::fmt::Write as _;

#[cfg(test)]
mod tests;

/// Darstellungsmodus einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveMode {
    /// Quadratische Spline durch die Joints
    #[default]
    Curve,
    /// Polylinie durch alle Punkte
    Line,
}

impl CurveMode {
    /// Wechselt zwischen Curve und Line.
    pub fn toggled(self) -> Self {
        match self {
            CurveMode::Curve => CurveMode::Line,
            CurveMode::Line => CurveMode::Curve,
        }
    }
}

/// Ein Segment des abgeleiteten Pfads (SVG-Semantik).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Pfadanfang (M)
    MoveTo(Vec2),
    /// Gerade Linie (L)
    LineTo(Vec2),
    /// Quadratisches Bézier-Segment (Q): Steuerpunkt + Endpunkt
    QuadraticTo { control: Vec2, end: Vec2 },
    /// Glatte Fortsetzung (T): Steuerpunkt wird am vorherigen Segment gespiegelt
    SmoothQuadraticTo(Vec2),
}

/// Leitet die Segmentliste aus der Punktsequenz ab.
///
/// Curve-Modus: `MoveTo` auf Punkt 0, jedes Control mit folgendem Endpunkt
/// wird `QuadraticTo`, der letzte Punkt eine glatte Fortsetzung (`T`).
/// Die Segmentart folgt dem gespeicherten `kind`-Tag der Punkte, nicht der
/// Index-Parität.
///
/// Line-Modus: jeder Punkt nach Index 0 wird `LineTo`, unabhängig vom Tag.
pub fn build_path(points: &[CurvePoint], mode: CurveMode) -> Vec<PathSegment> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut segments = Vec::with_capacity(points.len() / 2 + 2);
    segments.push(PathSegment::MoveTo(first.position));

    let last = points.len() - 1;
    for (i, point) in points.iter().enumerate().skip(1) {
        if i == last {
            segments.push(match mode {
                CurveMode::Curve => PathSegment::SmoothQuadraticTo(point.position),
                CurveMode::Line => PathSegment::LineTo(point.position),
            });
            break;
        }

        match mode {
            CurveMode::Curve => {
                // Joints vor dem Ende sind nur Endpunkte des vorangehenden
                // Q-Segments und werden nicht separat emittiert.
                if point.is_control() {
                    segments.push(PathSegment::QuadraticTo {
                        control: point.position,
                        end: points[i + 1].position,
                    });
                }
            }
            CurveMode::Line => segments.push(PathSegment::LineTo(point.position)),
        }
    }

    segments
}

/// Formatiert eine Segmentliste als SVG-Pfadstring (für Logs und Diagnose).
pub fn path_to_svg(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        if !out.is_empty() {
            out.push(' ');
        }
        match segment {
            PathSegment::MoveTo(p) => {
                let _ = write!(out, "M {} {}", p.x, p.y);
            }
            PathSegment::LineTo(p) => {
                let _ = write!(out, "L {} {}", p.x, p.y);
            }
            PathSegment::QuadraticTo { control, end } => {
                let _ = write!(out, "Q {} {} {} {}", control.x, control.y, end.x, end.y);
            }
            PathSegment::SmoothQuadraticTo(p) => {
                let _ = write!(out, "T {} {}", p.x, p.y);
            }
        }
    }
    out
}
