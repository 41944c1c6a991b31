//! Application Controller für zentrale Event-Verarbeitung.

use super::{handlers, render_scene, AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        match command {
            // === Draft-Lifecycle ===
            AppCommand::StartDraft { pos } => handlers::drafting::start_draft(state, pos),
            AppCommand::AppendDraftPoint { pos } => handlers::drafting::append_point(state, pos),
            AppCommand::PreviewDraftPoint { pos } => handlers::drafting::preview_point(state, pos),
            AppCommand::FinishDraft => handlers::drafting::finish_draft(state),

            // === Edit-Phase ===
            AppCommand::ToggleCurveMode => handlers::editing::toggle_curve_mode(state),
            AppCommand::ToggleDebugDraw => handlers::editing::toggle_debug_draw(state)?,
            AppCommand::BeginHandleDrag { pos } => handlers::editing::begin_handle_drag(state, pos),
            AppCommand::UpdateHandleDrag { pos } => {
                handlers::editing::update_handle_drag(state, pos)
            }
            AppCommand::EndHandleDrag => handlers::editing::end_handle_drag(state),

            // === System ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
