use super::{build_path, path_to_svg, CurveMode, PathSegment};
use crate::core::point_model::PointModel;
use glam::Vec2;

/// Punktsequenz aus drei Klicks: J(0,0), C(100,0), J(100,50), C(100,100).
fn drei_klick_modell() -> PointModel {
    let mut model = PointModel::new(Vec2::ZERO);
    model.append_durable(Vec2::new(100.0, 0.0));
    model.append_durable(Vec2::new(100.0, 100.0));
    model
}

// ─── Curve-Modus ─────────────────────────────────────────────────────────────

#[test]
fn test_leere_punktliste_ergibt_leeren_pfad() {
    assert!(build_path(&[], CurveMode::Curve).is_empty());
    assert!(build_path(&[], CurveMode::Line).is_empty());
}

#[test]
fn test_einzelner_punkt_ergibt_nur_moveto() {
    let model = PointModel::new(Vec2::new(3.0, 4.0));
    let segments = build_path(model.points(), CurveMode::Curve);
    assert_eq!(segments, vec![PathSegment::MoveTo(Vec2::new(3.0, 4.0))]);
}

#[test]
fn test_zwei_punkte_ergeben_glatte_fortsetzung() {
    let mut model = PointModel::new(Vec2::ZERO);
    model.append_durable(Vec2::new(10.0, 10.0));

    let segments = build_path(model.points(), CurveMode::Curve);
    assert_eq!(
        segments,
        vec![
            PathSegment::MoveTo(Vec2::ZERO),
            PathSegment::SmoothQuadraticTo(Vec2::new(10.0, 10.0)),
        ]
    );
}

#[test]
fn test_vier_punkte_ergeben_moveto_quadratic_smooth() {
    let model = drei_klick_modell();
    let segments = build_path(model.points(), CurveMode::Curve);

    assert_eq!(
        segments,
        vec![
            PathSegment::MoveTo(Vec2::ZERO),
            PathSegment::QuadraticTo {
                control: Vec2::new(100.0, 0.0),
                end: Vec2::new(100.0, 50.0),
            },
            PathSegment::SmoothQuadraticTo(Vec2::new(100.0, 100.0)),
        ]
    );
}

#[test]
fn test_joints_vor_dem_ende_werden_nicht_separat_emittiert() {
    let mut model = drei_klick_modell();
    model.append_durable(Vec2::new(0.0, 100.0));
    // J, C, J, C, J, C → M + 2×Q + T
    let segments = build_path(model.points(), CurveMode::Curve);
    assert_eq!(segments.len(), 4);
    assert!(matches!(segments[1], PathSegment::QuadraticTo { .. }));
    assert!(matches!(segments[2], PathSegment::QuadraticTo { .. }));
    assert!(matches!(segments[3], PathSegment::SmoothQuadraticTo(_)));
}

// ─── Line-Modus ──────────────────────────────────────────────────────────────

#[test]
fn test_line_modus_emittiert_jeden_punkt() {
    let model = drei_klick_modell();
    let segments = build_path(model.points(), CurveMode::Line);

    assert_eq!(
        segments,
        vec![
            PathSegment::MoveTo(Vec2::ZERO),
            PathSegment::LineTo(Vec2::new(100.0, 0.0)),
            PathSegment::LineTo(Vec2::new(100.0, 50.0)),
            PathSegment::LineTo(Vec2::new(100.0, 100.0)),
        ]
    );
}

// ─── Determinismus & Modus-Wechsel ───────────────────────────────────────────

#[test]
fn test_build_path_ist_idempotent() {
    let model = drei_klick_modell();
    let first = build_path(model.points(), CurveMode::Curve);
    let second = build_path(model.points(), CurveMode::Curve);
    assert_eq!(first, second);
}

#[test]
fn test_modus_wechsel_ist_involutiv() {
    let model = drei_klick_modell();
    let original = build_path(model.points(), CurveMode::Curve);

    // Hin- und Zurückschalten bei unveränderten Punkten reproduziert den Pfad
    let _line = build_path(model.points(), CurveMode::Line);
    let roundtrip = build_path(model.points(), CurveMode::Curve);
    assert_eq!(original, roundtrip);
}

#[test]
fn test_toggled_wechselt_beide_richtungen() {
    assert_eq!(CurveMode::Curve.toggled(), CurveMode::Line);
    assert_eq!(CurveMode::Line.toggled(), CurveMode::Curve);
}

// ─── SVG-Formatierung ────────────────────────────────────────────────────────

#[test]
fn test_path_to_svg_format() {
    let model = drei_klick_modell();
    let svg = path_to_svg(&build_path(model.points(), CurveMode::Curve));
    assert_eq!(svg, "M 0 0 Q 100 0 100 50 T 100 100");
}
