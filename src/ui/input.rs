//! Viewport-Input-Handling: Maus-Events → AppIntent.
//!
//! Übersetzt rohe Zeiger-Events der Zeichenfläche in Intents:
//! Klick (Punkt setzen), Bewegung (Vorschau), Drag (Handle greifen).

use super::keyboard;
use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Input-Zustand für die Zeichenfläche.
#[derive(Default)]
pub struct InputState {
    /// True zwischen Drag-Start und Drag-Ende
    drag_active: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { drag_active: false }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus- und
    /// Tastatur-Interaktionen auf der Zeichenfläche.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        is_drafting: bool,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(keyboard::collect_keyboard_intents(ui, is_drafting));

        // Klick: Punkt setzen bzw. neuen Draft beginnen
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::CanvasClicked {
                    pos: screen_pos_to_canvas(pos, response),
                });
            }
        }

        // Drag-Lifecycle: Handles greifen und nachziehen
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.drag_active = true;
                events.push(AppIntent::HandleDragStarted {
                    pos: screen_pos_to_canvas(pos, response),
                });
            }
        }
        if self.drag_active && response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::HandleDragMoved {
                    pos: screen_pos_to_canvas(pos, response),
                });
            }
        }
        if response.drag_stopped() && self.drag_active {
            self.drag_active = false;
            events.push(AppIntent::HandleDragEnded);
        }

        // Zeigerbewegung: Vorschau-Schwanz des Drafts
        if !self.drag_active {
            if let Some(pos) = response.hover_pos() {
                if ui.input(|i| i.pointer.is_moving()) {
                    events.push(AppIntent::PointerMoved {
                        pos: screen_pos_to_canvas(pos, response),
                    });
                }
            }
        }

        events
    }
}

/// Rechnet eine Bildschirmposition in Canvas-Koordinaten um.
pub(crate) fn screen_pos_to_canvas(pointer_pos: egui::Pos2, response: &egui::Response) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    Vec2::new(local.x, local.y)
}
