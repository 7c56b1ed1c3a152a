//! Shape generation for 2D primitives
//!
//! Every shape becomes a plain triangle list so any backend can draw it.

use glam::Vec2;
use std::f32::consts::PI;

use super::scene::{DrawCommand, Drawable, EntityRef};
use super::vertex::{Vertex, colors};

/// Segments used for circle outlines
pub const CIRCLE_SEGMENTS: u32 = 48;

/// Generate vertices for a circle outline `thickness` wide, centred on `radius`
pub fn circle_outline(
    center: Vec2,
    radius: f32,
    thickness: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let inner_radius = (radius - thickness / 2.0).max(0.0);
    let outer_radius = radius + thickness / 2.0;
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Generate vertices for a polyline, one quad per segment
///
/// Zero-length segments (a ray that has not moved yet) produce nothing.
pub fn polyline(points: &[Vec2], thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let half = thickness / 2.0;
    let mut vertices = Vec::with_capacity((points.len() - 1) * 6);

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        let dir = (p2 - p1).normalize_or_zero();
        if dir == Vec2::ZERO {
            continue;
        }
        // Perpendicular for width
        let perp = Vec2::new(-dir.y, dir.x) * half;

        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}

/// Pick a color for a drawable; `frozen` says whether a ray has stopped
pub fn color_for(entity: EntityRef, frozen: bool) -> [f32; 4] {
    match entity {
        EntityRef::Player => colors::PLAYER,
        EntityRef::Obstacle(_) => colors::OBSTACLE,
        EntityRef::Ray(_) if frozen => colors::RAY_FROZEN,
        EntityRef::Ray(_) => colors::RAY,
    }
}

/// Tessellate a single drawable
pub fn tessellate(drawable: &Drawable, color: [f32; 4]) -> Vec<Vertex> {
    match &drawable.command {
        DrawCommand::Circle {
            center,
            radius,
            thickness,
        } => circle_outline(*center, *radius, *thickness, color, CIRCLE_SEGMENTS),
        DrawCommand::Polyline { points, thickness } => polyline(points, *thickness, color),
    }
}

/// Tessellate a whole scene into one triangle list
///
/// `is_frozen` reports whether the ray with a given id has stopped.
pub fn tessellate_scene(scene: &[Drawable], is_frozen: impl Fn(u32) -> bool) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for drawable in scene {
        let frozen = matches!(drawable.entity, EntityRef::Ray(id) if is_frozen(id));
        vertices.extend(tessellate(drawable, color_for(drawable.entity, frozen)));
    }
    vertices
}
