use super::map_intent_to_commands;
use crate::app::{AppCommand, AppIntent, AppState};
use glam::Vec2;

#[test]
fn test_klick_ohne_draft_startet_draft() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasClicked {
            pos: Vec2::new(5.0, 5.0),
        },
    );
    assert!(matches!(commands[..], [AppCommand::StartDraft { .. }]));
}

#[test]
fn test_klick_mit_draft_haengt_punkt_an() {
    let mut state = AppState::new();
    let id = state.registry.create_editor(Vec2::ZERO);
    state.draft_editor = Some(id);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasClicked {
            pos: Vec2::new(5.0, 5.0),
        },
    );
    assert!(matches!(commands[..], [AppCommand::AppendDraftPoint { .. }]));
}

#[test]
fn test_klick_auf_handle_startet_keinen_draft() {
    let mut state = AppState::new();
    let id = state.registry.create_editor(Vec2::ZERO);
    state.draft_editor = Some(id);
    {
        let editor = state.registry.get_mut(id).unwrap();
        editor.create_point(Vec2::new(100.0, 0.0));
        editor.finish();
    }
    state.draft_editor = None;

    // Klick direkt neben dem Handle bei (100, 0)
    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasClicked {
            pos: Vec2::new(102.0, 1.0),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn test_pointer_move_ohne_draft_ist_leer() {
    let state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::PointerMoved { pos: Vec2::ZERO });
    assert!(commands.is_empty());
}

#[test]
fn test_finish_ohne_draft_ist_leer() {
    let state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::FinishDraftRequested);
    assert!(commands.is_empty());
}

#[test]
fn test_drag_intents_waehrend_draft_sind_leer() {
    let mut state = AppState::new();
    let id = state.registry.create_editor(Vec2::ZERO);
    state.draft_editor = Some(id);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::HandleDragStarted {
            pos: Vec2::new(1.0, 1.0),
        },
    );
    assert!(commands.is_empty());
}
