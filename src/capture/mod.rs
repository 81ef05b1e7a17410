//! Capture module - the boss, its flight, and the vacuum capture sequence.

mod components;
pub mod flight;
mod plugin;
pub mod sequence;
mod systems;

pub use components::*;
pub use flight::{BossFlight, BossWaypoints};
pub use plugin::CapturePlugin;
pub use sequence::{CapturePhase, CaptureSequence};
