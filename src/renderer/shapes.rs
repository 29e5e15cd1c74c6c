//! Shape generation for 2D primitives
//!
//! Everything is tessellated into a plain triangle list in field coordinates.

use glam::Vec2;
use std::f32::consts::TAU;

use super::scene::{DrawCommand, Scene};
use super::vertex::Vertex;
use crate::color::Color;

/// Triangles per circle
pub const CIRCLE_SEGMENTS: usize = 32;

/// Seven-segment masks for 0-9, bit 0 = top, then clockwise, bit 6 = middle
const DIGIT_SEGMENTS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Digit width relative to its height
const DIGIT_ASPECT: f32 = 0.55;
/// Stroke thickness relative to digit height
const DIGIT_STROKE: f32 = 0.12;
/// Space between digits relative to digit height
const DIGIT_SPACING: f32 = 0.2;

/// Axis-aligned rectangle as two triangles
pub fn rect(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: Color) {
    let max = min + size;
    let tl = Vertex::colored(min.x, min.y, color);
    let tr = Vertex::colored(max.x, min.y, color);
    let bl = Vertex::colored(min.x, max.y, color);
    let br = Vertex::colored(max.x, max.y, color);
    out.extend_from_slice(&[tl, bl, tr, tr, bl, br]);
}

/// Filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: Color) {
    let c = Vertex::colored(center.x, center.y, color);
    let point = |i: usize| {
        let theta = i as f32 / CIRCLE_SEGMENTS as f32 * TAU;
        let p = center + Vec2::new(theta.cos(), theta.sin()) * radius;
        Vertex::colored(p.x, p.y, color)
    };

    for i in 0..CIRCLE_SEGMENTS {
        out.extend_from_slice(&[c, point(i), point(i + 1)]);
    }
}

/// Dashed line from `from` to `to`. The final dash is cut short at `to`.
pub fn dashed_line(
    out: &mut Vec<Vertex>,
    from: Vec2,
    to: Vec2,
    dash: f32,
    gap: f32,
    thickness: f32,
    color: Color,
) {
    let length = from.distance(to);
    if length <= 0.0 || dash <= 0.0 {
        return;
    }
    let dir = (to - from) / length;
    let half_width = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);

    let mut start = 0.0;
    while start < length {
        let end = (start + dash).min(length);
        let a = from + dir * start;
        let b = from + dir * end;

        let a1 = a + half_width;
        let a2 = a - half_width;
        let b1 = b + half_width;
        let b2 = b - half_width;
        out.extend_from_slice(&[
            Vertex::colored(a1.x, a1.y, color),
            Vertex::colored(a2.x, a2.y, color),
            Vertex::colored(b1.x, b1.y, color),
            Vertex::colored(b1.x, b1.y, color),
            Vertex::colored(a2.x, a2.y, color),
            Vertex::colored(b2.x, b2.y, color),
        ]);

        start += dash + gap.max(0.0);
    }
}

/// A decimal number drawn as seven-segment digits, left edge at
/// `baseline.x`, bottom edge on `baseline.y`
pub fn number(out: &mut Vec<Vertex>, value: u32, baseline: Vec2, height: f32, color: Color) {
    let width = height * DIGIT_ASPECT;
    let stroke = height * DIGIT_STROKE;
    let half = height / 2.0;
    let mut x = baseline.x;
    let top = baseline.y - height;

    for digit in value.to_string().bytes().map(|b| (b - b'0') as usize) {
        let origin = Vec2::new(x, top);
        // (offset, size) for segments a..g
        let segments = [
            (Vec2::new(0.0, 0.0), Vec2::new(width, stroke)),
            (Vec2::new(width - stroke, 0.0), Vec2::new(stroke, half)),
            (Vec2::new(width - stroke, half), Vec2::new(stroke, half)),
            (Vec2::new(0.0, height - stroke), Vec2::new(width, stroke)),
            (Vec2::new(0.0, half), Vec2::new(stroke, half)),
            (Vec2::new(0.0, 0.0), Vec2::new(stroke, half)),
            (Vec2::new(0.0, half - stroke / 2.0), Vec2::new(width, stroke)),
        ];

        let mask = DIGIT_SEGMENTS[digit];
        for (bit, (offset, size)) in segments.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                rect(out, origin + *offset, *size, color);
            }
        }

        x += width + height * DIGIT_SPACING;
    }
}

/// Tessellate every command in a scene. `Clear` produces no geometry; the
/// backend handles it as the render pass clear color.
pub fn tessellate(scene: &Scene) -> Vec<Vertex> {
    let mut out = Vec::new();
    for command in &scene.commands {
        match *command {
            DrawCommand::Clear(_) => {}
            DrawCommand::DashedLine {
                from,
                to,
                dash,
                gap,
                thickness,
                color,
            } => dashed_line(&mut out, from, to, dash, gap, thickness, color),
            DrawCommand::Rect { min, size, color } => rect(&mut out, min, size, color),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => circle(&mut out, center, radius, color),
            DrawCommand::Number {
                value,
                baseline,
                height,
                color,
            } => number(&mut out, value, baseline, height, color),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::renderer::scene::SceneStyle;
    use crate::sim::SimulationState;

    #[test]
    fn test_rect_corners() {
        let mut out = Vec::new();
        rect(&mut out, Vec2::new(10.0, 20.0), Vec2::new(5.0, 8.0), Color::WHITE);
        assert_eq!(out.len(), 6);
        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 15.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 28.0);
    }

    #[test]
    fn test_circle_stays_on_radius() {
        let mut out = Vec::new();
        let center = Vec2::new(100.0, 100.0);
        circle(&mut out, center, 10.0, Color::WHITE);
        assert_eq!(out.len(), CIRCLE_SEGMENTS * 3);
        for v in &out {
            let d = Vec2::from(v.position).distance(center);
            assert!(d < 1e-3 || (d - 10.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_dashed_divider_count() {
        let mut out = Vec::new();
        dashed_line(
            &mut out,
            Vec2::new(400.0, 0.0),
            Vec2::new(400.0, 600.0),
            16.0,
            16.0,
            1.0,
            Color::WHITE,
        );
        // Dashes start every 32 units: 0, 32, ..., 576
        assert_eq!(out.len(), 19 * 6);
        assert!(out.iter().all(|v| v.position[1] <= 600.0));
    }

    #[test]
    fn test_dashed_line_truncates_last_dash() {
        let mut out = Vec::new();
        dashed_line(&mut out, Vec2::ZERO, Vec2::new(40.0, 0.0), 16.0, 16.0, 2.0, Color::WHITE);
        assert_eq!(out.len(), 12);
        let max_x = out.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert_eq!(max_x, 40.0);
    }

    #[test]
    fn test_degenerate_dashed_line() {
        let mut out = Vec::new();
        dashed_line(&mut out, Vec2::ONE, Vec2::ONE, 16.0, 16.0, 1.0, Color::WHITE);
        assert!(out.is_empty());
    }

    #[test]
    fn test_number_segments() {
        let mut out = Vec::new();
        number(&mut out, 8, Vec2::new(0.0, 30.0), 30.0, Color::WHITE);
        assert_eq!(out.len(), 7 * 6);

        let mut out = Vec::new();
        number(&mut out, 10, Vec2::new(0.0, 30.0), 30.0, Color::WHITE);
        // "1" lights two segments, "0" lights six
        assert_eq!(out.len(), 8 * 6);
        let min_y = out.iter().map(|v| v.position[1]).fold(f32::MAX, f32::min);
        let max_y = out.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(min_y, 0.0);
        assert_eq!(max_y, 30.0);
    }

    #[test]
    fn test_tessellate_opening_scene() {
        let config = Config::default();
        let state = SimulationState::new(&config, 1).unwrap();
        let scene = Scene::from_state(&state, &SceneStyle::from(&config));
        let vertices = tessellate(&scene);
        let divider = 19 * 6;
        let paddles = 2 * 6;
        let ball = CIRCLE_SEGMENTS * 3;
        let scores = 2 * 6 * 6;
        assert_eq!(vertices.len(), divider + paddles + ball + scores);
    }
}
