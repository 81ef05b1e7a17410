//! Session checkpoints.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the checkpoint text form.
#[derive(Error, Debug)]
pub enum CheckpointError {
    #[error("Failed to encode checkpoint: {0}")]
    Encode(String),

    #[error("Failed to decode checkpoint: {0}")]
    Decode(String),
}

/// Snapshot of a running session, taken on wave transitions and on request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameCheckpoint {
    pub score: i32,
    /// Elapsed game time in seconds
    pub time: f32,
    pub wave: i32,
    pub player_health: f32,
    pub boss_defeated: bool,
}

impl GameCheckpoint {
    /// Encode as RON for an external persistence layer.
    pub fn to_ron(&self) -> Result<String, CheckpointError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| CheckpointError::Encode(e.to_string()))
    }

    pub fn from_ron(contents: &str) -> Result<Self, CheckpointError> {
        ron::from_str(contents).map_err(|e| CheckpointError::Decode(e.to_string()))
    }
}
