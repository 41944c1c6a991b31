//! Core-Domänentypen: Punkte, Punktsequenz, Pfad-Rekonstruktion.
//!
//! Dieses Modul definiert die Haupt-Datenstrukturen:
//! - CurvePoint: Einzelner Punkt mit Rolle (Joint | Control) und Vorschau-Flag
//! - PointModel: Geordnete Punktsequenz einer Kurve
//! - PathSegment/build_path: Abgeleitete Pfad-Segmente (nie gespeichert)

pub mod path;
pub mod point;
pub mod point_model;

pub use path::{build_path, path_to_svg, CurveMode, PathSegment};
pub use point::{CurvePoint, PointKind};
pub use point_model::PointModel;
