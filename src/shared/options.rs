//! Zentrale Konfiguration für den Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kurven-Rendering ────────────────────────────────────────────────

/// Linienstärke des Kurvenpfads in Pixeln.
pub const PATH_STROKE_WIDTH: f32 = 1.5;
/// Farbe des Kurvenpfads (RGBA: Schwarz).
pub const PATH_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Handles ─────────────────────────────────────────────────────────

/// Radius der Drag-Handles in Pixeln.
pub const HANDLE_RADIUS: f32 = 7.0;
/// Füllfarbe der Drag-Handles (RGBA: Rot).
pub const HANDLE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Pick-Radius für Handle-Drags in Pixeln.
pub const HANDLE_PICK_RADIUS: f32 = 10.0;

// ── Debug-Darstellung ───────────────────────────────────────────────

/// Radius der Joint-Marker in Pixeln.
pub const DEBUG_MARKER_RADIUS: f32 = 5.0;
/// Farbe der Joint-Marker (RGBA: Blau, halbtransparent).
pub const DEBUG_MARKER_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 0.33];
/// Linienstärke der Konstruktionslinien in Pixeln.
pub const DEBUG_LINE_WIDTH: f32 = 0.5;
/// Farbe der Konstruktionslinien (RGBA: Blau, halbtransparent).
pub const DEBUG_LINE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 0.44];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curve_sketch.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Pfad ────────────────────────────────────────────────────
    /// Linienstärke des Kurvenpfads in Pixeln
    pub path_stroke_width: f32,
    /// Farbe des Kurvenpfads (RGBA)
    pub path_color: [f32; 4],

    // ── Handles ─────────────────────────────────────────────────
    /// Radius der Drag-Handles in Pixeln
    pub handle_radius: f32,
    /// Füllfarbe der Drag-Handles
    pub handle_color: [f32; 4],
    /// Pick-Radius für Handle-Drags in Pixeln
    pub handle_pick_radius: f32,

    // ── Debug ───────────────────────────────────────────────────
    /// Joint-Marker und Konstruktionslinien einzeichnen
    #[serde(default)]
    pub debug_draw: bool,
    /// Radius der Joint-Marker in Pixeln
    pub debug_marker_radius: f32,
    /// Farbe der Joint-Marker
    pub debug_marker_color: [f32; 4],
    /// Linienstärke der Konstruktionslinien in Pixeln
    pub debug_line_width: f32,
    /// Farbe der Konstruktionslinien
    pub debug_line_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            path_stroke_width: PATH_STROKE_WIDTH,
            path_color: PATH_COLOR,

            handle_radius: HANDLE_RADIUS,
            handle_color: HANDLE_COLOR,
            handle_pick_radius: HANDLE_PICK_RADIUS,

            debug_draw: false,
            debug_marker_radius: DEBUG_MARKER_RADIUS,
            debug_marker_color: DEBUG_MARKER_COLOR,
            debug_line_width: DEBUG_LINE_WIDTH,
            debug_line_color: DEBUG_LINE_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_sketch.toml")
    }
}
