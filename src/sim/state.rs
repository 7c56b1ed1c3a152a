//! Game state and core simulation types
//!
//! Entities are plain data. Rendering keeps its own handles keyed by
//! obstacle index or ray id; nothing here knows how it gets drawn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Circle;
use crate::settings::SessionConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Rays travel, the player moves
    Playing,
    /// Terminal; nothing moves again
    Over,
}

/// Why the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// A ray head touched the player
    PlayerHit { ray: u32 },
    /// A ray reached the right edge of the arena
    RayEscaped { ray: u32 },
}

/// Player step size mode (a persistent toggle, not a held modifier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedMode {
    #[default]
    Normal,
    Fast,
}

impl SpeedMode {
    pub fn toggled(self) -> Self {
        match self {
            SpeedMode::Normal => SpeedMode::Fast,
            SpeedMode::Fast => SpeedMode::Normal,
        }
    }
}

/// Why an attempted move was rolled back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    /// The disc would touch or cross an arena wall
    OutOfBounds,
    /// The disc would touch the obstacle at this index
    Obstacle(usize),
}

/// Something that happened during a single frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SpeedToggled(SpeedMode),
    RayFrozen { ray: u32, x: f32 },
    PlayerHit { ray: u32 },
    RayEscaped { ray: u32 },
    PlayerMoved { from: Vec2, to: Vec2 },
    MoveRejected { reason: MoveRejection },
    GameOver(GameOverCause),
}

/// The square play field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub size: f32,
}

/// The player's disc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub speed_mode: SpeedMode,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            speed_mode: SpeedMode::Normal,
        }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    /// Per-direction displacement for this frame
    pub fn step_size(&self, step: f32, fast_multiplier: f32) -> f32 {
        match self.speed_mode {
            SpeedMode::Normal => step,
            SpeedMode::Fast => step * fast_multiplier,
        }
    }
}

/// A static circular obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub center: Vec2,
    pub radius: f32,
}

impl Obstacle {
    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }
}

/// A horizontally travelling ray
///
/// The full path from the origin is kept so the renderer can draw the trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ray {
    pub id: u32,
    pub pos: Vec2,
    /// Set on first obstacle contact, never cleared
    pub collided: bool,
    /// Every position the ray has occupied, origin first
    pub path: Vec<Vec2>,
}

impl Ray {
    pub fn new(id: u32, origin: Vec2) -> Self {
        Self {
            id,
            pos: origin,
            collided: false,
            path: vec![origin],
        }
    }

    /// Move right by `speed` and extend the trail; frozen rays stay put
    pub fn advance(&mut self, speed: f32) {
        if self.collided {
            return;
        }
        self.pos.x += speed;
        self.path.push(self.pos);
    }

    /// Off-arena once the head reaches the right edge
    #[inline]
    pub fn is_off_arena(&self, arena: &Arena) -> bool {
        self.pos.x >= arena.size
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub player: Player,
    /// Rays in id order, top to bottom
    pub rays: Vec<Ray>,
    /// Normal-mode player step
    pub step: f32,
    pub fast_multiplier: f32,
    pub ray_speed: f32,
    /// Stroke width handed to the renderer
    pub outline_thickness: f32,
    pub phase: GamePhase,
    /// Set together with `GamePhase::Over`
    pub cause: Option<GameOverCause>,
    /// Frames simulated while playing
    pub frame: u64,
    pub(super) obstacles: Vec<Obstacle>,
}

impl GameState {
    /// Build a fresh session
    ///
    /// # Panics
    ///
    /// Panics if `config` breaks a construction contract (see
    /// [`SessionConfig::validate`]).
    pub fn new(config: &SessionConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid session config: {err}");
        }

        let obstacles = config
            .obstacles
            .iter()
            .map(|o| Obstacle {
                center: o.center,
                radius: o.radius,
            })
            .collect();

        let rays: Vec<Ray> = config
            .ray_offsets()
            .enumerate()
            .map(|(i, y)| Ray::new(i as u32, Vec2::new(config.ray_origin_x, y)))
            .collect();

        log::info!(
            "New session: arena {}, {} obstacles, {} rays",
            config.arena_size,
            config.obstacles.len(),
            rays.len()
        );

        Self {
            arena: Arena {
                size: config.arena_size,
            },
            player: Player::new(config.player_start, config.player_radius),
            rays,
            step: config.step,
            fast_multiplier: config.fast_multiplier,
            ray_speed: config.ray_speed,
            outline_thickness: config.outline_thickness,
            phase: GamePhase::Playing,
            cause: None,
            frame: 0,
            obstacles,
        }
    }

    /// The obstacle set, fixed for the whole session
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Current per-direction step for the player
    pub fn player_step(&self) -> f32 {
        self.player.step_size(self.step, self.fast_multiplier)
    }

    /// Enter the terminal phase; the first cause sticks
    pub(crate) fn end(&mut self, cause: GameOverCause) -> bool {
        if self.is_over() {
            return false;
        }
        self.phase = GamePhase::Over;
        self.cause = Some(cause);
        true
    }
}
