//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

#[cfg(test)]
mod tests;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasClicked { pos } => {
            if state.is_drafting() {
                return vec![AppCommand::AppendDraftPoint { pos }];
            }

            // Klicks im Pick-Radius eines Handles sind für Drags reserviert
            // und starten keinen neuen Draft.
            let pick_radius = state.options.handle_pick_radius;
            let on_handle = state
                .handle_positions()
                .iter()
                .any(|h| h.distance(pos) <= pick_radius);
            if on_handle {
                return vec![];
            }

            vec![AppCommand::StartDraft { pos }]
        }
        AppIntent::PointerMoved { pos } => {
            if state.is_drafting() {
                vec![AppCommand::PreviewDraftPoint { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::FinishDraftRequested => {
            if state.is_drafting() {
                vec![AppCommand::FinishDraft]
            } else {
                vec![]
            }
        }
        AppIntent::ToggleModeRequested => vec![AppCommand::ToggleCurveMode],
        AppIntent::ToggleDebugRequested => vec![AppCommand::ToggleDebugDraw],
        AppIntent::HandleDragStarted { pos } => {
            if state.is_drafting() {
                vec![]
            } else {
                vec![AppCommand::BeginHandleDrag { pos }]
            }
        }
        AppIntent::HandleDragMoved { pos } => {
            if state.active_drag.is_some() {
                vec![AppCommand::UpdateHandleDrag { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::HandleDragEnded => vec![AppCommand::EndHandleDrag],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
