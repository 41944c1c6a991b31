//! Application-Layer: Controller, State, Events und Handler.

pub mod controller;
pub mod editor;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod registry;
pub mod render_scene;
pub mod state;

pub use controller::AppController;
pub use editor::{CurveEditor, EditorPhase, FinishOutcome, HandleBinding};
pub use events::{AppCommand, AppIntent};
pub use registry::EditorRegistry;
pub use render_scene::build as build_render_scene;
pub use state::{ActiveDrag, AppState};
