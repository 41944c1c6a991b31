use super::drag::apply_handle_drag;
use super::{CurveEditor, EditorPhase, FinishOutcome};
use crate::core::{PointKind, PointModel};
use glam::Vec2;

/// Editor nach drei Klicks: J(0,0), C(100,0), J(100,50), C(100,100).
fn drei_klick_editor() -> CurveEditor {
    let mut editor = CurveEditor::new(1, Vec2::ZERO);
    editor.create_point(Vec2::new(100.0, 0.0));
    editor.create_point(Vec2::new(100.0, 100.0));
    editor
}

// ─── Draft-Flow ──────────────────────────────────────────────────────────────

#[test]
fn test_draft_flow_punkte_und_vorschau() {
    let mut editor = CurveEditor::new(1, Vec2::ZERO);
    assert!(editor.is_drafting());
    assert_eq!(editor.model.len(), 1);

    editor.create_point(Vec2::new(100.0, 0.0));
    editor.move_preview(Vec2::new(150.0, 20.0));
    assert_eq!(editor.model.durable_len(), 2);
    assert_eq!(editor.model.len(), 4);

    // Vorschau folgt dem Zeiger ohne dauerhafte Mutation
    editor.move_preview(Vec2::new(180.0, 40.0));
    assert_eq!(editor.model.durable_len(), 2);
    assert_eq!(editor.model.len(), 4);
}

#[test]
fn test_finish_mit_einem_punkt_meldet_destroyed() {
    let mut editor = CurveEditor::new(1, Vec2::ZERO);
    editor.move_preview(Vec2::new(50.0, 50.0));
    assert_eq!(editor.finish(), FinishOutcome::Destroyed);
}

#[test]
fn test_finish_wechselt_in_edit_phase() {
    let mut editor = drei_klick_editor();
    editor.move_preview(Vec2::new(200.0, 200.0));

    assert_eq!(editor.finish(), FinishOutcome::Editing);
    assert_eq!(editor.phase, EditorPhase::Editing);
    // Vorschau-Punkte sind gestrippt
    assert_eq!(editor.model.len(), 4);

    // Nach dem Finish werden keine Punkte mehr angenommen
    editor.create_point(Vec2::new(500.0, 500.0));
    editor.move_preview(Vec2::new(600.0, 600.0));
    assert_eq!(editor.model.len(), 4);
}

// ─── Handle-Erzeugung ────────────────────────────────────────────────────────

#[test]
fn test_handles_an_index_0_und_controls() {
    let mut editor = drei_klick_editor();
    editor.finish();

    let indices: Vec<usize> = editor.handles().iter().map(|h| h.point_index).collect();
    // Index 0 und die beiden Controls; der synthetisierte Joint bei 2 bekommt keins
    assert_eq!(indices, vec![0, 1, 3]);
}

#[test]
fn test_handle_positionen_folgen_dem_modell() {
    let mut editor = drei_klick_editor();
    editor.finish();

    let positions = editor.handle_positions();
    assert_eq!(
        positions,
        vec![Vec2::ZERO, Vec2::new(100.0, 0.0), Vec2::new(100.0, 100.0)]
    );
}

// ─── Drag-Nachziehung ────────────────────────────────────────────────────────

/// Modell aus dem Nachziehungs-Beispiel: J0(0,0), C1(10,10), J2(20,20), C3(30,30).
fn beispiel_modell() -> PointModel {
    let mut model = PointModel::new(Vec2::ZERO);
    model.append_durable(Vec2::new(10.0, 10.0));
    model.append_durable(Vec2::new(30.0, 30.0));
    // append synthetisiert J2 am Mittelpunkt (20,20)
    assert_eq!(model.get(2).unwrap().position, Vec2::new(20.0, 20.0));
    model
}

#[test]
fn test_drag_von_c1_zieht_nur_j2_nach() {
    let mut model = beispiel_modell();
    apply_handle_drag(&mut model, 1, Vec2::new(10.0, 50.0));

    assert_eq!(model.get(0).unwrap().position, Vec2::ZERO);
    assert_eq!(model.get(1).unwrap().position, Vec2::new(10.0, 50.0));
    // J2 = Mittelpunkt((10,50), (30,30)) = (20,40)
    assert_eq!(model.get(2).unwrap().position, Vec2::new(20.0, 40.0));
    assert_eq!(model.get(3).unwrap().position, Vec2::new(30.0, 30.0));
}

#[test]
fn test_drag_von_index_0_zieht_nicht_vorwaerts() {
    let mut model = beispiel_modell();
    let j2_before = model.get(2).unwrap().position;

    apply_handle_drag(&mut model, 0, Vec2::new(-10.0, -10.0));

    assert_eq!(model.get(0).unwrap().position, Vec2::new(-10.0, -10.0));
    // Index 0: keine Vorwärts-Nachziehung, J2 bleibt unverändert
    assert_eq!(model.get(2).unwrap().position, j2_before);
}

#[test]
fn test_drag_des_letzten_controls_zieht_rueckwaerts() {
    let mut model = beispiel_modell();
    apply_handle_drag(&mut model, 3, Vec2::new(50.0, 10.0));

    assert_eq!(model.get(3).unwrap().position, Vec2::new(50.0, 10.0));
    // J2 = Mittelpunkt((50,10), C1(10,10)) = (30,10)
    assert_eq!(model.get(2).unwrap().position, Vec2::new(30.0, 10.0));
    assert_eq!(model.get(0).unwrap().position, Vec2::ZERO);
    assert_eq!(model.get(1).unwrap().position, Vec2::new(10.0, 10.0));
}

#[test]
fn test_drag_beruehrt_nur_direkte_nachbarn() {
    // Längere Kurve: J0 C1 J2 C3 J4 C5
    let mut model = PointModel::new(Vec2::ZERO);
    model.append_durable(Vec2::new(10.0, 0.0));
    model.append_durable(Vec2::new(20.0, 0.0));
    model.append_durable(Vec2::new(30.0, 0.0));
    let before: Vec<Vec2> = model.points().iter().map(|p| p.position).collect();

    apply_handle_drag(&mut model, 3, Vec2::new(20.0, 40.0));

    // Nur Indizes 2, 3, 4 dürfen sich ändern
    for (i, p) in model.points().iter().enumerate() {
        if (2..=4).contains(&i) {
            continue;
        }
        assert_eq!(p.position, before[i], "Punkt {} wurde unerwartet bewegt", i);
    }
    // Joints bleiben Joints, Controls bleiben Controls
    assert_eq!(model.get(2).unwrap().kind, PointKind::Joint);
    assert_eq!(model.get(3).unwrap().kind, PointKind::Control);
}

#[test]
fn test_drag_pick_und_update_ueber_handle() {
    let mut editor = drei_klick_editor();
    editor.finish();

    // Weit weg von allen Handles: kein Grab
    assert!(!editor.on_drag_start(Vec2::new(500.0, 500.0), 10.0));
    assert!(!editor.is_dragging());

    // C1 greifen und verschieben
    assert!(editor.on_drag_start(Vec2::new(102.0, 1.0), 10.0));
    editor.on_drag_update(Vec2::new(120.0, -20.0));
    assert_eq!(editor.model.get(1).unwrap().position, Vec2::new(120.0, -20.0));
    // J2 = Mittelpunkt((120,-20), C3(100,100)) = (110,40)
    assert_eq!(editor.model.get(2).unwrap().position, Vec2::new(110.0, 40.0));

    editor.on_drag_end();
    assert!(!editor.is_dragging());
}

#[test]
fn test_drag_start_waehrend_draft_wird_abgelehnt() {
    let mut editor = drei_klick_editor();
    assert!(!editor.on_drag_start(Vec2::ZERO, 10.0));
}
