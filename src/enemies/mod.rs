//! Enemies module - ghosts, their state machine, steering and pooling.

mod ai;
pub mod animation;
pub mod brain;
mod components;
mod focus;
mod plugin;
pub mod pool;
pub mod steering;

pub use animation::{GhostAnimationCue, GhostClip};
pub use brain::{GhostBrain, GhostStateKind};
pub use components::*;
pub use focus::FreezeFocus;
pub use plugin::EnemyPlugin;
pub use pool::{acquire_ghost, release_ghost, GhostPool, PoolPolicy, PoolSlot};
