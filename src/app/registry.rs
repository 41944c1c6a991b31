//! Registry aller lebenden Kurven-Editoren.
//!
//! Explizites Objekt statt prozessweiter globaler Liste: der Frame-Treiber
//! besitzt die Registry über den AppState. Einfüge-Reihenfolge = Zeichen-
//! Reihenfolge; sie bestimmt nur die Z-Ordnung der Drawables.

use super::editor::CurveEditor;
use glam::Vec2;

/// Geordnete Liste aller lebenden Kurven-Editoren.
#[derive(Debug, Default)]
pub struct EditorRegistry {
    editors: Vec<CurveEditor>,
    next_id: u64,
}

impl EditorRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self {
            editors: Vec::new(),
            next_id: 1,
        }
    }

    /// Erstellt einen neuen Editor mit Start-Joint und liefert seine ID.
    pub fn create_editor(&mut self, start: Vec2) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.editors.push(CurveEditor::new(id, start));
        log::info!("Neue Kurve {} bei ({:.1}, {:.1})", id, start.x, start.y);
        id
    }

    /// Entfernt einen Editor. Liefert true wenn er vorhanden war.
    ///
    /// Kompaktierung über `retain`: Entfernen passiert zwischen den Frames,
    /// nie während einer laufenden Iteration.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.editors.len();
        self.editors.retain(|e| e.id != id);
        let removed = self.editors.len() != before;
        if removed {
            log::info!("Kurve {} entfernt", id);
        }
        removed
    }

    /// Liest einen Editor per ID.
    pub fn get(&self, id: u64) -> Option<&CurveEditor> {
        self.editors.iter().find(|e| e.id == id)
    }

    /// Mutabler Zugriff per ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut CurveEditor> {
        self.editors.iter_mut().find(|e| e.id == id)
    }

    /// Iteriert in Erstellungs-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &CurveEditor> {
        self.editors.iter()
    }

    /// Mutable Iteration in Erstellungs-Reihenfolge.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CurveEditor> {
        self.editors.iter_mut()
    }

    /// Anzahl lebender Editoren.
    pub fn len(&self) -> usize {
        self.editors.len()
    }

    /// True wenn keine Editoren leben.
    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}
