//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` per rendered frame, no clock
//! - No randomness; the session is fully described by its config
//! - Stable iteration order (obstacles by index, rays by id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Circle, circle_inside_square, circles_overlap, point_inside_circle};
pub use state::{
    Arena, GameEvent, GameOverCause, GamePhase, GameState, MoveRejection, Obstacle, Player, Ray,
    SpeedMode,
};
pub use tick::{FrameIntents, tick};
