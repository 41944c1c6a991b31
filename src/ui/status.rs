//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Kurven: {}", state.curve_count()));

            ui.separator();

            if state.is_drafting() {
                ui.label("Entwurf aktiv — Klick setzt Punkte, Esc/Enter schließt ab");
            } else if state.active_drag.is_some() {
                ui.label("Handle wird verschoben");
            } else if state.registry.is_empty() {
                ui.label("Klick auf die Fläche beginnt eine neue Kurve");
            } else {
                ui.label("Handles per Drag verschieben, Klick beginnt eine neue Kurve");
            }

            ui.separator();

            ui.label(format!(
                "Debug: {}",
                if state.options.debug_draw { "an" } else { "aus" }
            ));
        });
    });
}
