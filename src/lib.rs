//! Curve-Sketch Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CurveEditor, EditorPhase, EditorRegistry,
    FinishOutcome, HandleBinding,
};
pub use core::{build_path, path_to_svg, CurveMode, CurvePoint, PathSegment, PointKind, PointModel};
pub use shared::{EditorOptions, RenderScene};
