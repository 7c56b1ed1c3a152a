//! Keyboard to intent mapping
//!
//! The host window polls its keyboard however it likes and exposes the result
//! through [`KeySource`]. A key counts for a frame when it was just pressed or
//! is firing an auto-repeat, so holding a direction moves once per repeat
//! rather than once per frame.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::FrameIntents;

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    LeftShift,
    Escape,
}

/// Per-frame keyboard state as reported by the host
pub trait KeySource {
    /// Went down since the previous frame
    fn just_pressed(&self, key: Key) -> bool;
    /// Held long enough to auto-repeat this frame
    fn repeated(&self, key: Key) -> bool;

    /// Pressed or repeating
    fn active(&self, key: Key) -> bool {
        self.just_pressed(key) || self.repeated(key)
    }
}

/// In-memory keyboard snapshot, handy for headless drivers and tests
#[derive(Debug, Clone, Default)]
pub struct KeySnapshot {
    pub pressed: HashSet<Key>,
    pub repeating: HashSet<Key>,
}

impl KeySnapshot {
    pub fn pressed(keys: &[Key]) -> Self {
        Self {
            pressed: keys.iter().copied().collect(),
            repeating: HashSet::new(),
        }
    }
}

impl KeySource for KeySnapshot {
    fn just_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn repeated(&self, key: Key) -> bool {
        self.repeating.contains(&key)
    }
}

/// Key bindings for each intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    pub up: Vec<Key>,
    pub down: Vec<Key>,
    pub left: Vec<Key>,
    pub right: Vec<Key>,
    pub toggle_speed: Vec<Key>,
    pub quit: Vec<Key>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            up: vec![Key::W, Key::Up],
            down: vec![Key::S, Key::Down],
            left: vec![Key::A, Key::Left],
            right: vec![Key::D, Key::Right],
            toggle_speed: vec![Key::LeftShift],
            quit: vec![Key::Escape],
        }
    }
}

impl Keymap {
    /// Read this frame's intents from the keyboard
    pub fn intents(&self, keys: &dyn KeySource) -> FrameIntents {
        let any = |bound: &[Key]| bound.iter().any(|&k| keys.active(k));

        FrameIntents {
            move_up: any(&self.up),
            move_down: any(&self.down),
            move_left: any(&self.left),
            move_right: any(&self.right),
            toggle_speed: any(&self.toggle_speed),
            quit: any(&self.quit),
        }
    }
}
