//! Lifecycle-Methoden des Kurven-Editors (create_point, move_preview, finish).

use super::state::{CurveEditor, EditorPhase, HandleBinding};
use crate::core::path_to_svg;
use glam::Vec2;

/// Ergebnis von [`CurveEditor::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    /// ≥2 dauerhafte Punkte: Editor bleibt bestehen, Handles sind erzeugt
    Editing,
    /// Zu wenige Punkte: Aufrufer muss den Editor aus der Registry entfernen
    Destroyed,
}

impl CurveEditor {
    /// Hängt einen dauerhaften Punkt an. Außerhalb des Drafts: No-op.
    pub fn create_point(&mut self, pos: Vec2) {
        if !self.is_drafting() {
            return;
        }
        self.model.append_durable(pos);
    }

    /// Aktualisiert den Vorschau-Schwanz. Außerhalb des Drafts: No-op.
    pub fn move_preview(&mut self, pos: Vec2) {
        if !self.is_drafting() {
            return;
        }
        self.model.set_provisional_tail(pos);
    }

    /// Beendet den Draft: Vorschau-Punkte werden verworfen.
    ///
    /// Bleiben ≥2 dauerhafte Punkte, wechselt der Editor in die Edit-Phase
    /// und erzeugt Handle-Bindungen. Andernfalls meldet er `Destroyed` und
    /// der Aufrufer entfernt ihn aus der Registry (stille Zerstörung statt
    /// Fehler, auch bei Finish ohne Punkte).
    pub fn finish(&mut self) -> FinishOutcome {
        if !self.is_drafting() {
            return FinishOutcome::Editing;
        }

        if !self.model.finalize() {
            log::info!("Kurve {}: zu wenige Punkte, wird verworfen", self.id);
            return FinishOutcome::Destroyed;
        }

        self.handles = generate_handles(self);
        self.phase = EditorPhase::Editing;
        log::debug!(
            "Kurve {} abgeschlossen: {} Punkte, Pfad {}",
            self.id,
            self.model.len(),
            path_to_svg(&self.path())
        );
        FinishOutcome::Editing
    }
}

/// Erzeugt Handle-Bindungen für alle verschiebbaren Punkte:
/// Index 0 plus jeder Control-Punkt. Synthetisierte Joints sind vollständig
/// abgeleitet und bekommen kein Handle.
fn generate_handles(editor: &CurveEditor) -> Vec<HandleBinding> {
    editor
        .model
        .points()
        .iter()
        .enumerate()
        .filter(|(index, point)| *index == 0 || point.is_control())
        .map(|(index, _)| HandleBinding { point_index: index })
        .collect()
}
