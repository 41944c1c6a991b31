//! Hauptzustand der Anwendung.

use super::registry::EditorRegistry;
use crate::shared::EditorOptions;

/// Laufender Handle-Drag: welcher Editor hält gerade ein Handle?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveDrag {
    /// ID des Editors, dessen Handle gegriffen wurde
    pub editor_id: u64,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle lebenden Kurven-Editoren
    pub registry: EditorRegistry,
    /// ID des Editors im Draft (höchstens einer gleichzeitig)
    pub draft_editor: Option<u64>,
    /// Laufender Handle-Drag
    pub active_drag: Option<ActiveDrag>,
    /// Laufzeit-Optionen (Farben, Radien, Debug-Flag)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            registry: EditorRegistry::new(),
            draft_editor: None,
            active_drag: None,
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Anzahl der Kurven (für UI-Anzeige)
    pub fn curve_count(&self) -> usize {
        self.registry.len()
    }

    /// True solange ein Draft aktiv ist.
    pub fn is_drafting(&self) -> bool {
        self.draft_editor.is_some()
    }

    /// Alle Handle-Positionen der Editoren in der Edit-Phase
    /// (für Pick-Priorität im Input-Routing).
    pub fn handle_positions(&self) -> Vec<glam::Vec2> {
        self.registry
            .iter()
            .filter(|e| !e.is_drafting())
            .flat_map(|e| e.handle_positions())
            .collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
