//! Scripted input for headless sessions
//!
//! A script is a list of segments, each holding one set of intents for a
//! number of consecutive frames:
//!
//! ```json
//! { "segments": [
//!     { "frames": 30, "move_down": true },
//!     { "frames": 1, "toggle_speed": true },
//!     { "frames": 10, "move_left": true, "move_down": true }
//! ] }
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::FrameIntents;

/// A run of identical frames
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSegment {
    pub frames: u32,
    #[serde(flatten)]
    pub intents: FrameIntents,
}

/// Ordered intent segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputScript {
    #[serde(default)]
    pub segments: Vec<ScriptSegment>,
}

impl InputScript {
    /// Total number of scripted frames
    pub fn len(&self) -> u64 {
        self.segments.iter().map(|s| s.frames as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One entry per frame, in order
    pub fn frames(&self) -> impl Iterator<Item = FrameIntents> + '_ {
        self.segments
            .iter()
            .flat_map(|s| std::iter::repeat_n(s.intents, s.frames as usize))
    }

    pub fn from_json_str(json: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(json).map_err(ScriptError::Parse)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(ScriptError::Io)?;
        let script = Self::from_json_str(&json)?;
        log::info!(
            "Loaded input script from {} ({} frames)",
            path.display(),
            script.len()
        );
        Ok(script)
    }
}

/// Failure to read an [`InputScript`]
#[derive(Debug)]
pub enum ScriptError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read input script: {err}"),
            Self::Parse(err) => write!(f, "malformed input script: {err}"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}
