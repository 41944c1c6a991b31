//! Handler für den Draft-Lifecycle (Start, Anhängen, Vorschau, Finish).

use crate::app::editor::FinishOutcome;
use crate::app::AppState;
use glam::Vec2;

/// Startet einen neuen Draft. Läuft bereits einer, wird der Klick dorthin
/// weitergereicht statt einen zweiten Draft zu öffnen.
pub fn start_draft(state: &mut AppState, pos: Vec2) {
    if state.draft_editor.is_some() {
        append_point(state, pos);
        return;
    }
    let id = state.registry.create_editor(pos);
    state.draft_editor = Some(id);
}

/// Hängt einen dauerhaften Punkt an den laufenden Draft an.
pub fn append_point(state: &mut AppState, pos: Vec2) {
    let Some(id) = state.draft_editor else {
        return;
    };
    if let Some(editor) = state.registry.get_mut(id) {
        editor.create_point(pos);
    }
}

/// Aktualisiert den Vorschau-Schwanz des laufenden Drafts.
pub fn preview_point(state: &mut AppState, pos: Vec2) {
    let Some(id) = state.draft_editor else {
        return;
    };
    if let Some(editor) = state.registry.get_mut(id) {
        editor.move_preview(pos);
    }
}

/// Beendet den laufenden Draft.
///
/// Bleiben zu wenige dauerhafte Punkte, wird der Editor still entfernt;
/// seine Drawables verschwinden mit der nächsten Szenen-Ableitung.
pub fn finish_draft(state: &mut AppState) {
    let Some(id) = state.draft_editor.take() else {
        return;
    };
    let Some(editor) = state.registry.get_mut(id) else {
        return;
    };

    if editor.finish() == FinishOutcome::Destroyed {
        state.registry.remove(id);
    }
}
