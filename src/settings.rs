//! Session configuration
//!
//! Everything a session needs is fixed at startup: arena size, player
//! geometry, ray field layout and the obstacle set. Nothing here is random and
//! nothing changes once a [`GameState`](crate::sim::GameState) is built.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::collision::{Circle, circle_inside_square, circles_overlap};

/// One static obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub radius: f32,
    pub center: Vec2,
}

impl ObstacleConfig {
    pub const fn new(radius: f32, x: f32, y: f32) -> Self {
        Self {
            radius,
            center: Vec2::new(x, y),
        }
    }
}

/// Static session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side length of the square arena
    pub arena_size: f32,
    /// Player disc radius
    pub player_radius: f32,
    /// Player spawn point
    pub player_start: Vec2,
    /// Distance moved per active direction per frame in normal mode
    pub step: f32,
    /// Step multiplier while fast mode is on
    pub fast_multiplier: f32,
    /// Horizontal distance every ray travels per frame
    pub ray_speed: f32,
    /// X coordinate all rays start from
    pub ray_origin_x: f32,
    /// Y coordinate of the first ray
    pub ray_first_offset: f32,
    /// Vertical gap between neighbouring rays
    pub ray_spacing: f32,
    /// Static obstacles
    pub obstacles: Vec<ObstacleConfig>,
    /// Line thickness handed to the renderer for every shape
    pub outline_thickness: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            arena_size: ARENA_SIZE,
            player_radius: PLAYER_RADIUS,
            player_start: Vec2::new(ARENA_SIZE - 50.0, 50.0),
            step: PLAYER_STEP,
            fast_multiplier: FAST_MULTIPLIER,
            ray_speed: RAY_SPEED,
            ray_origin_x: 0.0,
            ray_first_offset: RAY_FIRST_OFFSET,
            ray_spacing: RAY_SPACING,
            obstacles: vec![
                ObstacleConfig::new(200.0, 100.0, 200.0),
                ObstacleConfig::new(300.0, 400.0, ARENA_SIZE),
            ],
            outline_thickness: OUTLINE_THICKNESS,
        }
    }
}

impl SessionConfig {
    /// Candidate ray slots from `ray_first_offset` up to the far edge, capped at [`MAX_RAYS`]
    fn ray_slots(&self) -> u32 {
        let span = ((self.arena_size - self.ray_first_offset) / self.ray_spacing).ceil();
        if span.is_nan() {
            return 0;
        }
        span.clamp(0.0, MAX_RAYS as f32) as u32
    }

    /// Vertical offsets of the ray field, top to bottom, strictly inside the arena
    pub fn ray_offsets(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.ray_slots())
            .map(|i| self.ray_first_offset + i as f32 * self.ray_spacing)
            .filter(|y| *y > 0.0 && *y < self.arena_size)
    }

    /// Check every construction contract, returning the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_size", self.arena_size),
            ("player_radius", self.player_radius),
            ("step", self.step),
            ("fast_multiplier", self.fast_multiplier),
            ("ray_spacing", self.ray_spacing),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive finite number, got {value}"),
                });
            }
        }

        let non_negative = [
            ("ray_speed", self.ray_speed),
            ("outline_thickness", self.outline_thickness),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a non-negative finite number, got {value}"),
                });
            }
        }

        for (field, value) in [
            ("ray_origin_x", self.ray_origin_x),
            ("ray_first_offset", self.ray_first_offset),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be finite, got {value}"),
                });
            }
        }

        if self.ray_first_offset + self.ray_spacing == self.ray_first_offset {
            return Err(ConfigError::Invalid {
                field: "ray_spacing",
                reason: format!(
                    "{} is too small to separate rays starting at {}",
                    self.ray_spacing, self.ray_first_offset
                ),
            });
        }
        let slots = ((self.arena_size - self.ray_first_offset) / self.ray_spacing).ceil();
        if !slots.is_finite() || slots > MAX_RAYS as f32 {
            return Err(ConfigError::Invalid {
                field: "ray_spacing",
                reason: format!("ray field would hold {slots} rays, limit is {MAX_RAYS}"),
            });
        }

        for (i, obstacle) in self.obstacles.iter().enumerate() {
            if !(obstacle.radius.is_finite() && obstacle.radius >= 0.0)
                || !obstacle.center.is_finite()
            {
                return Err(ConfigError::Invalid {
                    field: "obstacles",
                    reason: format!("obstacle {i} has a negative or non-finite shape"),
                });
            }
        }

        let player = Circle::new(self.player_start, self.player_radius);
        if !player.center.is_finite() || !circle_inside_square(&player, self.arena_size) {
            return Err(ConfigError::Invalid {
                field: "player_start",
                reason: "player must start strictly inside the arena".to_string(),
            });
        }
        if let Some(i) = self
            .obstacles
            .iter()
            .position(|o| circles_overlap(&player, &Circle::new(o.center, o.radius)))
        {
            return Err(ConfigError::Invalid {
                field: "player_start",
                reason: format!("player starts overlapping obstacle {i}"),
            });
        }

        Ok(())
    }

    /// Parse a JSON config; missing fields fall back to the defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded session config from {}", path.display());
        Ok(config)
    }
}

/// Failure to obtain a usable [`SessionConfig`]
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "malformed config: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_ray_offsets_span_arena() {
        let config = SessionConfig::default();
        let offsets: Vec<f32> = config.ray_offsets().collect();
        assert_eq!(offsets.len(), 20);
        assert_eq!(offsets[0], 10.0);
        assert_eq!(offsets[10], 410.0);
        assert_eq!(*offsets.last().unwrap(), 770.0);
    }

    #[test]
    fn test_ray_offsets_skip_outside_arena() {
        let config = SessionConfig {
            arena_size: 100.0,
            ray_first_offset: -30.0,
            ray_spacing: 50.0,
            ..Default::default()
        };
        let offsets: Vec<f32> = config.ray_offsets().collect();
        assert_eq!(offsets, vec![20.0, 70.0]);
    }

    #[test]
    fn test_dense_ray_field_rejected() {
        for ray_spacing in [1e-30, 1e-3] {
            let config = SessionConfig {
                ray_spacing,
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { field: "ray_spacing", .. }));
        }

        // Exactly at the cap is still fine
        let config = SessionConfig {
            arena_size: MAX_RAYS as f32,
            player_start: Vec2::new(50.0, 50.0),
            ray_first_offset: 0.0,
            ray_spacing: 1.0,
            obstacles: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.ray_offsets().count(), MAX_RAYS as usize - 1);
    }

    #[test]
    fn test_ray_offsets_bounded_without_validation() {
        let config = SessionConfig {
            ray_spacing: 1e-30,
            ..Default::default()
        };
        assert!(config.ray_offsets().count() <= MAX_RAYS as usize);
    }

    #[test]
    fn test_non_finite_first_offset_named() {
        let config = SessionConfig {
            ray_first_offset: f32::NAN,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ray_first_offset", .. }));

        let config = SessionConfig {
            ray_origin_x: f32::INFINITY,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ray_origin_x", .. }));
    }

    #[test]
    fn test_negative_radius_rejected() {
        let config = SessionConfig {
            obstacles: vec![ObstacleConfig::new(-5.0, 100.0, 100.0)],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "obstacles", .. }));
    }

    #[test]
    fn test_player_start_must_be_free() {
        let config = SessionConfig {
            player_start: Vec2::new(5.0, 400.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SessionConfig {
            player_start: Vec2::new(100.0, 200.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SessionConfig::from_json_str(
            r#"{ "arena_size": 400, "player_start": [350, 50], "obstacles": [] }"#,
        )
        .unwrap();
        assert_eq!(config.arena_size, 400.0);
        assert_eq!(config.player_start, Vec2::new(350.0, 50.0));
        assert!(config.obstacles.is_empty());
        assert_eq!(config.ray_speed, RAY_SPEED);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SessionConfig::from_json_str("{ arena_size: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = SessionConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SessionConfig::from_json_str(&json).unwrap(), config);
    }
}
