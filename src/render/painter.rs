//! Zeichnet die Render-Szene mit dem egui-Painter.
//!
//! Quadratische Segmente gehen als `epaint::QuadraticBezierShape` an die
//! Tesselation; glatte Fortsetzungen (T) spiegeln den Steuerpunkt des
//! vorherigen Segments am aktuellen Endpunkt (SVG-Semantik).

use crate::core::PathSegment;
use crate::shared::{CircleDrawable, LineDrawable, PathDrawable, RenderScene};
use egui::epaint::QuadraticBezierShape;
use glam::Vec2;

/// Zeichnet eine komplette Szene relativ zum Canvas-Ursprung.
pub fn paint_scene(painter: &egui::Painter, origin: egui::Pos2, scene: &RenderScene) {
    for line in &scene.debug_lines {
        paint_line(painter, origin, line);
    }
    for marker in &scene.debug_markers {
        paint_circle(painter, origin, marker);
    }
    for path in &scene.paths {
        paint_path(painter, origin, path);
    }
    // Handles zuletzt: sie liegen über allem anderen
    for handle in &scene.handles {
        paint_circle(painter, origin, handle);
    }
}

/// Läuft die Segmentliste ab und emittiert Bézier- bzw. Linien-Shapes.
fn paint_path(painter: &egui::Painter, origin: egui::Pos2, path: &PathDrawable) {
    let stroke = egui::Stroke::new(path.stroke_width, color32(path.color));

    // Laufposition und Steuerpunkt des zuletzt gezeichneten Q/T-Segments
    let mut current = Vec2::ZERO;
    let mut prev_control: Option<Vec2> = None;

    for segment in &path.segments {
        match *segment {
            PathSegment::MoveTo(p) => {
                current = p;
                prev_control = None;
            }
            PathSegment::LineTo(p) => {
                painter.line_segment([to_pos(origin, current), to_pos(origin, p)], stroke);
                current = p;
                prev_control = None;
            }
            PathSegment::QuadraticTo { control, end } => {
                paint_quadratic(painter, origin, current, control, end, stroke);
                current = end;
                prev_control = Some(control);
            }
            PathSegment::SmoothQuadraticTo(end) => {
                // Spiegelung des vorherigen Steuerpunkts am aktuellen Punkt;
                // ohne Vorgänger-Q degeneriert T zur Geraden
                let control = match prev_control {
                    Some(c) => 2.0 * current - c,
                    None => current,
                };
                paint_quadratic(painter, origin, current, control, end, stroke);
                current = end;
                prev_control = Some(control);
            }
        }
    }
}

fn paint_quadratic(
    painter: &egui::Painter,
    origin: egui::Pos2,
    from: Vec2,
    control: Vec2,
    to: Vec2,
    stroke: egui::Stroke,
) {
    painter.add(QuadraticBezierShape::from_points_stroke(
        [to_pos(origin, from), to_pos(origin, control), to_pos(origin, to)],
        false,
        egui::Color32::TRANSPARENT,
        stroke,
    ));
}

fn paint_circle(painter: &egui::Painter, origin: egui::Pos2, circle: &CircleDrawable) {
    painter.circle_filled(to_pos(origin, circle.center), circle.radius, color32(circle.color));
}

fn paint_line(painter: &egui::Painter, origin: egui::Pos2, line: &LineDrawable) {
    painter.line_segment(
        [to_pos(origin, line.from), to_pos(origin, line.to)],
        egui::Stroke::new(line.stroke_width, color32(line.color)),
    );
}

/// Canvas-Koordinaten → Screen-Position.
fn to_pos(origin: egui::Pos2, p: Vec2) -> egui::Pos2 {
    origin + egui::vec2(p.x, p.y)
}

/// RGBA-Float-Farbe → `Color32`.
fn color32(color: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]).into()
}
