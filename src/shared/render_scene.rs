//! Render-Szene als expliziter Übergabevertrag zwischen App und Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Die Szene wird jedes Frame vollständig aus dem aktuellen Zustand neu
//! abgeleitet; es gibt kein inkrementelles Patchen einzelner Drawables.

use crate::core::PathSegment;
use glam::Vec2;

/// Ein Kurvenpfad als Segmentliste plus Strich-Stil.
#[derive(Debug, Clone)]
pub struct PathDrawable {
    /// Abgeleitete Pfad-Segmente
    pub segments: Vec<PathSegment>,
    /// Linienstärke in Pixeln
    pub stroke_width: f32,
    /// Farbe (RGBA)
    pub color: [f32; 4],
}

/// Ein gefüllter Kreis (Drag-Handle oder Joint-Marker).
#[derive(Debug, Clone, Copy)]
pub struct CircleDrawable {
    /// Mittelpunkt in Canvas-Koordinaten
    pub center: Vec2,
    /// Radius in Pixeln
    pub radius: f32,
    /// Füllfarbe (RGBA)
    pub color: [f32; 4],
}

/// Eine dünne Konstruktionslinie zwischen zwei Punkten.
#[derive(Debug, Clone, Copy)]
pub struct LineDrawable {
    /// Startpunkt
    pub from: Vec2,
    /// Endpunkt
    pub to: Vec2,
    /// Linienstärke in Pixeln
    pub stroke_width: f32,
    /// Farbe (RGBA)
    pub color: [f32; 4],
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Kurvenpfade aller registrierten Editoren
    pub paths: Vec<PathDrawable>,
    /// Drag-Handles (nur Editoren in der Edit-Phase)
    pub handles: Vec<CircleDrawable>,
    /// Joint-Marker der Debug-Darstellung
    pub debug_markers: Vec<CircleDrawable>,
    /// Konstruktionslinien der Debug-Darstellung
    pub debug_lines: Vec<LineDrawable>,
}

impl RenderScene {
    /// Gesamtzahl der Drawables in dieser Szene.
    pub fn drawable_count(&self) -> usize {
        self.paths.len() + self.handles.len() + self.debug_markers.len() + self.debug_lines.len()
    }
}
