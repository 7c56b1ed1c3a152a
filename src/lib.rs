//! Ray Dodge - steer a disc around a square arena while rays sweep across it
//!
//! Core modules:
//! - `sim`: Deterministic frame-stepped simulation (collisions, entities, game state)
//! - `settings`: Static session configuration
//! - `input`: Physical keys to per-frame movement intents
//! - `replay`: Scripted intents for headless runs
//! - `renderer`: Draw commands and vertex data for whatever renderer hosts the game

pub mod input;
pub mod renderer;
pub mod replay;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, ObstacleConfig, SessionConfig};

/// Default session tuning
pub mod consts {
    /// Arena side length
    pub const ARENA_SIZE: f32 = 800.0;

    /// Player disc radius
    pub const PLAYER_RADIUS: f32 = 10.0;
    /// Normal movement step per frame
    pub const PLAYER_STEP: f32 = 1.0;
    /// Step multiplier while fast mode is on
    pub const FAST_MULTIPLIER: f32 = 20.0;

    /// Ray travel per frame
    pub const RAY_SPEED: f32 = 2.0;
    /// First ray's distance from the top edge
    pub const RAY_FIRST_OFFSET: f32 = 10.0;
    /// Gap between neighbouring rays
    pub const RAY_SPACING: f32 = 40.0;
    /// Upper bound on the ray field size
    pub const MAX_RAYS: u32 = 4096;

    /// Stroke width for every outline
    pub const OUTLINE_THICKNESS: f32 = 1.0;
}
