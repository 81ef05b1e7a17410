//! Session module - game flow, scoring, game over and checkpoints.

mod checkpoint;
mod plugin;
mod resources;
mod systems;

pub use checkpoint::{CheckpointError, GameCheckpoint};
pub use plugin::{SessionPlugin, SessionSet};
pub use resources::*;
