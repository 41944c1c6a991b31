//! Pro-Kurve-Controller: Punktmodell, Lifecycle und Handle-Drags.

mod drag;
mod lifecycle;
mod state;

#[cfg(test)]
mod tests;

pub use lifecycle::FinishOutcome;
pub use state::{CurveEditor, EditorPhase, HandleBinding};
