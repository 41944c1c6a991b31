//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, is_drafting: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, escape_pressed, enter_pressed, key_q_pressed, key_d_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::D),
        )
    });

    // Escape oder Enter schließen den laufenden Draft ab
    if is_drafting && (escape_pressed || enter_pressed) {
        events.push(AppIntent::FinishDraftRequested);
    }

    // Ctrl+D: Debug-Darstellung umschalten
    if modifiers.command && key_d_pressed {
        events.push(AppIntent::ToggleDebugRequested);
    }

    // Ctrl+Q: Anwendung beenden
    if modifiers.command && key_q_pressed {
        events.push(AppIntent::ExitRequested);
    }

    events
}
