//! Draw commands for the current frame
//!
//! The simulation never owns render handles. Each drawable is tagged with the
//! entity it came from so a renderer can keep its own buffers keyed by
//! obstacle index or ray id and reuse them across frames.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// Stable reference to the entity a drawable belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityRef {
    Player,
    Obstacle(usize),
    Ray(u32),
}

/// A shape to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Circle outline
    Circle {
        center: Vec2,
        radius: f32,
        thickness: f32,
    },
    /// Connected line segments through `points`
    Polyline { points: Vec<Vec2>, thickness: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub entity: EntityRef,
    pub command: DrawCommand,
}

/// Everything visible this frame: obstacles, ray trails, then the player on top
///
/// After game over the same scene is produced every frame, frozen in place.
pub fn build_scene(state: &GameState) -> Vec<Drawable> {
    let thickness = state.outline_thickness;
    let mut scene = Vec::with_capacity(state.obstacles().len() + state.rays.len() + 1);

    scene.extend(state.obstacles().iter().enumerate().map(|(i, o)| Drawable {
        entity: EntityRef::Obstacle(i),
        command: DrawCommand::Circle {
            center: o.center,
            radius: o.radius,
            thickness,
        },
    }));

    scene.extend(state.rays.iter().map(|ray| Drawable {
        entity: EntityRef::Ray(ray.id),
        command: DrawCommand::Polyline {
            points: ray.path.clone(),
            thickness,
        },
    }));

    scene.push(Drawable {
        entity: EntityRef::Player,
        command: DrawCommand::Circle {
            center: state.player.pos,
            radius: state.player.radius,
            thickness,
        },
    });

    scene
}
