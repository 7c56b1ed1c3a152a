//! Distance-based overlap tests
//!
//! Everything in the arena is a circle (the player, obstacles) or a point
//! (a ray head). Touching counts as overlapping in every test here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circle in arena space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// True when the distance between centers minus both radii is <= 0
#[inline]
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    a.center.distance(b.center) - (a.radius + b.radius) <= 0.0
}

/// True when the distance from `point` to the circle center minus its radius is <= 0
#[inline]
pub fn point_inside_circle(point: Vec2, circle: &Circle) -> bool {
    point.distance(circle.center) - circle.radius <= 0.0
}

/// Check that a circle lies strictly inside the square `[0, size]²`
///
/// Touching a wall counts as leaving the arena.
pub fn circle_inside_square(circle: &Circle, size: f32) -> bool {
    let Circle { center, radius } = *circle;

    // Bottom / top
    if center.y - radius <= 0.0 || center.y + radius >= size {
        return false;
    }
    // Left / right
    if center.x - radius <= 0.0 || center.x + radius >= size {
        return false;
    }
    true
}
