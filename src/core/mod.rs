//! Core game module - states, events, and fundamental helpers.
//!
//! This module provides the foundation that all other game systems build upon.

mod events;
mod plugin;
mod rng;
mod states;
mod tween;

pub use events::*;
pub use plugin::CorePlugin;
pub use rng::GameRng;
pub use states::*;
pub use tween::*;
