//! State-Definitionen und Konstruktor für den Kurven-Editor.

use crate::core::{build_path, CurveMode, PathSegment, PointModel};
use glam::Vec2;

/// Phase eines Kurven-Editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// Neue Punkte können angehängt werden, der Zeiger liefert eine Vorschau
    Drafting,
    /// Punktanzahl eingefroren, Handles erlauben das Verschieben
    Editing,
}

/// Bindet ein Drag-Handle an einen Punkt-Index.
///
/// Explizites Mapping statt Closure pro Handle: die Drag-Verarbeitung
/// schlägt den Index nach und wendet eine gemeinsame Routine an.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleBinding {
    /// Index des gebundenen Punkts im Modell
    pub point_index: usize,
}

/// Controller für genau eine Kurve: Punktmodell, Modus, Phase, Handles.
#[derive(Debug, Clone)]
pub struct CurveEditor {
    /// Registry-weite eindeutige ID
    pub id: u64,
    /// Punktsequenz dieser Kurve
    pub model: PointModel,
    /// Aktueller Darstellungsmodus
    pub mode: CurveMode,
    /// Drafting oder Editing
    pub phase: EditorPhase,
    /// Handle → Punkt-Index (erst nach Finish befüllt)
    pub(crate) handles: Vec<HandleBinding>,
    /// Index des gerade gegriffenen Handles
    pub(crate) dragging: Option<usize>,
}

impl CurveEditor {
    /// Erstellt einen neuen Editor im Drafting-Zustand mit dem Start-Joint.
    pub fn new(id: u64, start: Vec2) -> Self {
        Self {
            id,
            model: PointModel::new(start),
            mode: CurveMode::Curve,
            phase: EditorPhase::Drafting,
            handles: Vec::new(),
            dragging: None,
        }
    }

    /// True solange der Editor neue Punkte akzeptiert.
    pub fn is_drafting(&self) -> bool {
        self.phase == EditorPhase::Drafting
    }

    /// Leitet die Segmentliste aus dem aktuellen Punktstand ab.
    pub fn path(&self) -> Vec<PathSegment> {
        build_path(self.model.points(), self.mode)
    }

    /// Wechselt den Darstellungsmodus und erzwingt damit eine
    /// Pfad-Neuableitung beim nächsten Frame.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Handle-Bindungen (leer während des Drafts).
    pub fn handles(&self) -> &[HandleBinding] {
        &self.handles
    }

    /// Positionen aller Handles in Modell-Reihenfolge.
    pub fn handle_positions(&self) -> Vec<Vec2> {
        self.handles
            .iter()
            .filter_map(|h| self.model.get(h.point_index))
            .map(|p| p.position)
            .collect()
    }
}
