//! Toolbar: Modus-Umschalter und Debug-Checkbox.

use crate::app::{AppIntent, AppState};
use crate::core::CurveMode;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Kurven:");
            ui.separator();

            // Ein Button schaltet alle registrierten Kurven gleichzeitig um
            let any_line = state
                .registry
                .iter()
                .any(|e| e.mode == CurveMode::Line);
            let label = if any_line {
                "Modus: Linie → Kurve"
            } else {
                "Modus: Kurve → Linie"
            };
            if ui
                .add_enabled(!state.registry.is_empty(), egui::Button::new(label))
                .clicked()
            {
                events.push(AppIntent::ToggleModeRequested);
            }

            ui.separator();

            let mut debug_draw = state.options.debug_draw;
            if ui
                .checkbox(&mut debug_draw, "Debug-Darstellung (Strg+D)")
                .changed()
            {
                events.push(AppIntent::ToggleDebugRequested);
            }
        });
    });

    events
}
