//! Baut die Render-Szene aus dem aktuellen App-Zustand.
//!
//! Läuft einmal pro Frame über alle registrierten Editoren: Pfad, Handles
//! und Debug-Darstellung werden vollständig neu abgeleitet, bevor der eine
//! Paint-Durchlauf des Frames startet.

use super::AppState;
use crate::shared::{CircleDrawable, LineDrawable, PathDrawable, RenderScene};

/// Leitet die komplette Szene aus dem AppState ab.
pub fn build(state: &AppState) -> RenderScene {
    let mut scene = RenderScene::default();
    let options = &state.options;

    for editor in state.registry.iter() {
        scene.paths.push(PathDrawable {
            segments: editor.path(),
            stroke_width: options.path_stroke_width,
            color: options.path_color,
        });

        // Handles nur in der Edit-Phase
        if !editor.is_drafting() {
            for pos in editor.handle_positions() {
                scene.handles.push(CircleDrawable {
                    center: pos,
                    radius: options.handle_radius,
                    color: options.handle_color,
                });
            }
        }

        if options.debug_draw {
            build_debug(&mut scene, editor, options);
        }
    }

    scene
}

/// Debug-Darstellung: Marker für jeden Joint außer Index 0 und dünne
/// Konstruktionslinien zwischen aufeinanderfolgenden Punkten
/// (Vorschau-Punkte eingeschlossen). Rein beobachtend.
fn build_debug(
    scene: &mut RenderScene,
    editor: &crate::app::editor::CurveEditor,
    options: &crate::shared::EditorOptions,
) {
    let points = editor.model.points();

    for (index, point) in points.iter().enumerate() {
        if index == 0 || !point.is_joint() {
            continue;
        }
        scene.debug_markers.push(CircleDrawable {
            center: point.position,
            radius: options.debug_marker_radius,
            color: options.debug_marker_color,
        });
    }

    for pair in points.windows(2) {
        scene.debug_lines.push(LineDrawable {
            from: pair[0].position,
            to: pair[1].position,
            stroke_width: options.debug_line_width,
            color: options.debug_line_color,
        });
    }
}
