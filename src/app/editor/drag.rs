//! Drag-Logik für die Kurven-Handles.
//!
//! Kernalgorithmus der Nachziehung: das Verschieben eines Steuerpunkts
//! verschiebt genau die beiden angrenzenden synthetisierten Joints mit,
//! sodass jeder Joint am Mittelpunkt seiner Nachbar-Controls bleibt.

use super::state::CurveEditor;
use crate::core::{PointKind, PointModel};
use glam::Vec2;

impl CurveEditor {
    /// Sucht das nächstgelegene Handle innerhalb von `pick_radius` und
    /// beginnt den Drag. Liefert true wenn ein Handle gegriffen wurde.
    pub fn on_drag_start(&mut self, pos: Vec2, pick_radius: f32) -> bool {
        if self.is_drafting() {
            return false;
        }

        let best = self
            .handles
            .iter()
            .enumerate()
            .filter_map(|(handle_index, binding)| {
                let point = self.model.get(binding.point_index)?;
                Some((handle_index, point.position.distance(pos)))
            })
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        if let Some((handle_index, dist)) = best {
            if dist <= pick_radius {
                self.dragging = Some(handle_index);
                return true;
            }
        }
        false
    }

    /// Wendet die Live-Position des gegriffenen Handles an.
    pub fn on_drag_update(&mut self, pos: Vec2) {
        let Some(handle_index) = self.dragging else {
            return;
        };
        let Some(binding) = self.handles.get(handle_index) else {
            return;
        };
        apply_handle_drag(&mut self.model, binding.point_index, pos);
    }

    /// Beendet den Drag.
    pub fn on_drag_end(&mut self) {
        self.dragging = None;
    }

    /// True während eines aktiven Handle-Drags.
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }
}

/// Gemeinsame Drag-Routine: verschiebt Punkt `index` nach `pos` und zieht
/// die angrenzenden synthetisierten Joints auf den Mittelpunkt ihrer
/// Nachbar-Controls nach.
///
/// - Joint bei `index-1` (mit Control bei `index-2`): Mittelpunkt aus
///   Handle-Position und diesem Control.
/// - Für `index ≠ 0` symmetrisch der Joint bei `index+1` (mit Control bei
///   `index+2`).
///
/// Fehlende Nachbarn (Index außerhalb) werden stillschweigend übersprungen.
/// Weiter entfernte Punkte werden nie berührt.
pub(crate) fn apply_handle_drag(model: &mut PointModel, index: usize, pos: Vec2) {
    if index >= 2 {
        let joint_ok = model.get(index - 1).is_some_and(|p| p.kind == PointKind::Joint);
        if let (true, Some(control)) = (joint_ok, model.get(index - 2).copied()) {
            if control.kind == PointKind::Control {
                model.set_position(index - 1, pos.midpoint(control.position));
            }
        }
    }

    if index != 0 {
        let joint_ok = model.get(index + 1).is_some_and(|p| p.kind == PointKind::Joint);
        if let (true, Some(control)) = (joint_ok, model.get(index + 2).copied()) {
            if control.kind == PointKind::Control {
                model.set_position(index + 1, pos.midpoint(control.position));
            }
        }
    }

    model.set_position(index, pos);
}
