//! Waves module - per-wave parameters and the wave progression controller.

mod config;
mod controller;
mod error;
mod plugin;
mod systems;

pub use config::{GameplaySettings, WaveParameters, SETTINGS_PATH};
pub use controller::{WaveController, WaveEnded, WaveStarted, NOT_STARTED};
pub use error::ConfigError;
pub use plugin::WavePlugin;
