//! Per-wave gameplay configuration loaded from RON.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use super::error::ConfigError;

/// Default location of the gameplay settings file.
pub const SETTINGS_PATH: &str = "assets/data/gameplay.ron";

/// Settings for a single wave. Read-only once handed out.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WaveParameters {
    /// Ghost speed cap (units/s)
    pub max_velocity: f32,
    /// Ghost steering acceleration cap (units/s²)
    pub max_acceleration: f32,
    /// Distance at which a roaming ghost starts chasing
    pub chase_distance: f32,
    pub attack_damage: f32,
    /// Seconds between ghost attacks
    pub attack_cooldown: f32,
    /// Ghost starting health
    pub health: f32,
    /// Seconds between two ghost spawns
    pub spawn_delay: f32,
    /// Ghosts spawned per spawner per wave
    pub spawn_count: u32,
    /// Half extents of the spawn box around a spawner
    pub spawn_volume: (f32, f32, f32),
    /// Whether the boss spawner fires this wave
    pub spawn_boss: bool,
    /// Wave length in seconds
    pub wave_duration: f32,
    /// Score per ghost killed during this wave
    pub score_value: u32,
    /// Seconds from wave start to the first spawn
    pub initial_spawn_delay: f32,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            max_velocity: 2.0,
            max_acceleration: 6.0,
            chase_distance: 7.0,
            attack_damage: 1.0,
            attack_cooldown: 2.0,
            health: 10.0,
            spawn_delay: 2.0,
            spawn_count: 20,
            spawn_volume: (4.0, 4.0, 4.0),
            spawn_boss: false,
            wave_duration: 60.0,
            score_value: 10,
            initial_spawn_delay: 0.0,
        }
    }
}

impl WaveParameters {
    pub fn spawn_extent(&self) -> Vec3 {
        Vec3::new(self.spawn_volume.0, self.spawn_volume.1, self.spawn_volume.2)
    }

    pub fn spawn_interval(&self) -> Duration {
        seconds(self.spawn_delay)
    }

    pub fn initial_delay(&self) -> Duration {
        seconds(self.initial_spawn_delay)
    }

    pub fn attack_interval(&self) -> Duration {
        seconds(self.attack_cooldown)
    }

    fn validate(&self, wave: usize) -> Result<(), ConfigError> {
        let invalid = |details: &str| ConfigError::InvalidWave {
            wave,
            details: details.to_string(),
        };

        if !(self.wave_duration.is_finite() && self.wave_duration >= 0.0) {
            return Err(invalid("wave_duration must be a non-negative number"));
        }
        for (name, value) in [
            ("spawn_delay", self.spawn_delay),
            ("initial_spawn_delay", self.initial_spawn_delay),
            ("attack_cooldown", self.attack_cooldown),
        ] {
            if !(value >= 0.0 && Duration::try_from_secs_f32(value).is_ok()) {
                return Err(invalid(&format!("{name} must be a non-negative duration")));
            }
        }
        if !self.spawn_extent().is_finite() {
            return Err(invalid("spawn_volume must be finite"));
        }
        if self.max_velocity < 0.0 || self.max_acceleration < 0.0 {
            return Err(invalid("steering limits must not be negative"));
        }
        Ok(())
    }
}

/// Seconds as a `Duration`. Negative or NaN is zero; too large saturates.
fn seconds(value: f32) -> Duration {
    Duration::try_from_secs_f32(value.max(0.0)).unwrap_or(Duration::MAX)
}

/// Whole-session settings: wave table plus player baseline.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GameplaySettings {
    pub max_waves: usize,
    pub base_player_health: f32,
    pub waves: Vec<WaveParameters>,
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            max_waves: 3,
            base_player_health: 100.0,
            waves: Vec::new(),
        }
    }
}

impl GameplaySettings {
    /// Settings for `wave`.
    ///
    /// Indices outside `[0, max_waves)` or past the end of the table fall back
    /// to entry 0, or to the built-in defaults when the table is empty.
    pub fn wave(&self, wave: i32) -> WaveParameters {
        let in_range = wave >= 0 && (wave as usize) < self.max_waves;
        if in_range {
            if let Some(params) = self.waves.get(wave as usize) {
                return params.clone();
            }
        }
        self.fallback_wave()
    }

    fn fallback_wave(&self) -> WaveParameters {
        self.waves.first().cloned().unwrap_or_default()
    }

    /// Parse settings from RON text.
    pub fn from_ron(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let settings: GameplaySettings =
            ron::from_str(contents).map_err(|e| ConfigError::ParseError {
                path: origin.to_string(),
                details: e.to_string(),
            })?;

        for (index, wave) in settings.waves.iter().enumerate() {
            wave.validate(index)?;
        }
        Ok(settings)
    }

    /// Load settings from a RON file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(display));
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;

        Self::from_ron(&contents, &display)
    }
}
