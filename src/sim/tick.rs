//! Per-frame simulation update
//!
//! Frame order while playing:
//! 1. speed toggle
//! 2. advance rays (frozen rays stay put)
//! 3. freeze rays that touch an obstacle
//! 4. player hit by any ray -> over
//! 5. any ray at or past the right edge -> over
//! 6. move the player (skipped if 4 or 5 ended the session this frame)
//! 7. roll the move back if it leaves the arena or touches an obstacle
//!
//! Collisions are settled before movement, so the player cannot step out of
//! the way on the frame a ray reaches them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Circle, circle_inside_square, circles_overlap, point_inside_circle};
use super::state::{GameEvent, GameOverCause, GameState, MoveRejection};

/// Movement intents for a single frame
///
/// Each flag is true when its input was newly pressed or is auto-repeating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameIntents {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Flip between normal and fast step
    pub toggle_speed: bool,
    /// Ignored by the simulation; the driving loop stops on it
    pub quit: bool,
}

impl FrameIntents {
    /// Unnormalized direction: diagonals are faster than straight moves
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.move_up {
            dir.y += 1.0;
        }
        if self.move_down {
            dir.y -= 1.0;
        }
        if self.move_left {
            dir.x -= 1.0;
        }
        if self.move_right {
            dir.x += 1.0;
        }
        dir
    }
}

/// Advance the session by one frame and report what happened
pub fn tick(state: &mut GameState, input: &FrameIntents) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.is_over() {
        return events;
    }

    state.frame += 1;

    // 1. Speed toggle
    if input.toggle_speed {
        state.player.speed_mode = state.player.speed_mode.toggled();
        log::debug!("Speed mode -> {:?}", state.player.speed_mode);
        events.push(GameEvent::SpeedToggled(state.player.speed_mode));
    }

    // 2 + 3. Advance travelling rays, freeze on first obstacle contact
    let ray_speed = state.ray_speed;
    let obstacles = &state.obstacles;
    for ray in state.rays.iter_mut().filter(|r| !r.collided) {
        ray.advance(ray_speed);
        if obstacles
            .iter()
            .any(|o| point_inside_circle(ray.pos, &o.circle()))
        {
            ray.collided = true;
            log::debug!("Ray {} frozen at x = {}", ray.id, ray.pos.x);
            events.push(GameEvent::RayFrozen {
                ray: ray.id,
                x: ray.pos.x,
            });
        }
    }

    // 4. Death test against every ray head, frozen or not
    let player = state.player.circle();
    if let Some(ray) = state
        .rays
        .iter()
        .find(|r| point_inside_circle(r.pos, &player))
    {
        let ray = ray.id;
        events.push(GameEvent::PlayerHit { ray });
        if state.end(GameOverCause::PlayerHit { ray }) {
            events.push(GameEvent::GameOver(GameOverCause::PlayerHit { ray }));
        }
    }

    // 5. Off-arena test
    if let Some(ray) = state.rays.iter().find(|r| r.is_off_arena(&state.arena)) {
        let ray = ray.id;
        events.push(GameEvent::RayEscaped { ray });
        if state.end(GameOverCause::RayEscaped { ray }) {
            events.push(GameEvent::GameOver(GameOverCause::RayEscaped { ray }));
        }
    }

    if let Some(cause) = state.cause {
        log::info!("Game over on frame {}: {:?}", state.frame, cause);
        return events;
    }

    // 6 + 7. Move, then roll back on any constraint violation
    let dir = input.direction();
    if dir != Vec2::ZERO {
        let prev = state.player.pos;
        let next = prev + dir * state.player_step();
        match check_move(state, next) {
            Ok(()) => {
                state.player.pos = next;
                events.push(GameEvent::PlayerMoved {
                    from: prev,
                    to: next,
                });
            }
            Err(reason) => {
                log::trace!("Move to {next} rejected: {reason:?}");
                state.player.pos = prev;
                events.push(GameEvent::MoveRejected { reason });
            }
        }
    }

    events
}

/// Test a candidate player position against the walls and every obstacle
fn check_move(state: &GameState, next: Vec2) -> Result<(), MoveRejection> {
    let candidate = Circle::new(next, state.player.radius);

    if !circle_inside_square(&candidate, state.arena.size) {
        return Err(MoveRejection::OutOfBounds);
    }
    if let Some(i) = state
        .obstacles()
        .iter()
        .position(|o| circles_overlap(&candidate, &o.circle()))
    {
        return Err(MoveRejection::Obstacle(i));
    }
    Ok(())
}
