//! Handler für die Edit-Phase: Handle-Drags, Modus- und Debug-Umschaltung.

use crate::app::state::ActiveDrag;
use crate::app::AppState;
use crate::shared::EditorOptions;
use glam::Vec2;

/// Schaltet den Modus aller registrierten Editoren um.
pub fn toggle_curve_mode(state: &mut AppState) {
    for editor in state.registry.iter_mut() {
        editor.toggle_mode();
    }
    log::debug!("Modus umgeschaltet für {} Kurven", state.registry.len());
}

/// Schaltet die Debug-Darstellung um und persistiert die Optionen.
pub fn toggle_debug_draw(state: &mut AppState) -> anyhow::Result<()> {
    state.options.debug_draw = !state.options.debug_draw;
    state.options.save_to_file(&EditorOptions::config_path())
}

/// Sucht über alle Editoren in der Edit-Phase das nächstgelegene Handle
/// und beginnt den Drag darauf.
pub fn begin_handle_drag(state: &mut AppState, pos: Vec2) {
    let pick_radius = state.options.handle_pick_radius;
    for editor in state.registry.iter_mut() {
        if editor.on_drag_start(pos, pick_radius) {
            state.active_drag = Some(ActiveDrag { editor_id: editor.id });
            return;
        }
    }
}

/// Reicht die Live-Position an den draggenden Editor weiter.
pub fn update_handle_drag(state: &mut AppState, pos: Vec2) {
    let Some(drag) = state.active_drag else {
        return;
    };
    if let Some(editor) = state.registry.get_mut(drag.editor_id) {
        editor.on_drag_update(pos);
    }
}

/// Beendet den laufenden Handle-Drag.
pub fn end_handle_drag(state: &mut AppState) {
    if let Some(drag) = state.active_drag.take() {
        if let Some(editor) = state.registry.get_mut(drag.editor_id) {
            editor.on_drag_end();
        }
    }
}
