//! Wave configuration loading.

use bevy::prelude::*;
use std::path::Path;

use super::config::{GameplaySettings, SETTINGS_PATH};
use super::controller::WaveController;
use super::error::ConfigError;

/// Load gameplay settings from `assets/data/gameplay.ron`.
///
/// Any failure keeps the built-in defaults.
pub fn load_gameplay_settings(mut controller: ResMut<WaveController>) {
    match GameplaySettings::load(Path::new(SETTINGS_PATH)) {
        Ok(settings) => {
            info!(
                "Loaded gameplay settings: {} waves, {} defined",
                settings.max_waves,
                settings.waves.len()
            );
            controller.set_settings(settings);
        }
        Err(ConfigError::FileNotFound(path)) => {
            warn!("Gameplay settings not found at {}, using defaults", path);
        }
        Err(e) => {
            error!("Failed to load gameplay settings: {}", e);
        }
    }
}
