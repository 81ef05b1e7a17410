//! Wave progression state machine.
//!
//! The controller owns no clock. An external driver compares its own elapsed
//! game time against `time_to_start` and calls `advance_wave` when a
//! threshold is crossed.

use bevy::prelude::*;

use super::config::{GameplaySettings, WaveParameters};

/// Index value meaning "no wave has started yet".
pub const NOT_STARTED: i32 = -1;

/// Broadcast when a wave begins.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct WaveStarted {
    pub index: usize,
    pub params: WaveParameters,
}

/// Broadcast when a wave ends, right before the next one starts.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct WaveEnded {
    pub index: usize,
}

/// Current wave index plus the per-wave boss bookkeeping.
#[derive(Resource, Debug, Clone)]
pub struct WaveController {
    settings: GameplaySettings,
    current: i32,
    boss_spawned: bool,
}

impl Default for WaveController {
    fn default() -> Self {
        Self::new(GameplaySettings::default())
    }
}

impl WaveController {
    pub fn new(settings: GameplaySettings) -> Self {
        Self {
            settings,
            current: NOT_STARTED,
            boss_spawned: false,
        }
    }

    pub fn settings(&self) -> &GameplaySettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: GameplaySettings) {
        self.settings = settings;
    }

    /// Raw index, `NOT_STARTED` before the first wave.
    pub fn current_index(&self) -> i32 {
        self.current
    }

    pub fn current_wave(&self) -> Option<usize> {
        usize::try_from(self.current).ok()
    }

    pub fn is_started(&self) -> bool {
        self.current >= 0
    }

    /// Parameters of the running wave (fallback parameters before the start).
    pub fn current_parameters(&self) -> WaveParameters {
        self.settings.wave(self.current)
    }

    pub fn max_waves(&self) -> usize {
        self.settings.max_waves
    }

    /// Start wave 0.
    ///
    /// Callers guard against starting twice in one session; the controller
    /// simply restarts at wave 0.
    pub fn start_first_wave(&mut self) -> WaveStarted {
        self.current = 0;
        self.boss_spawned = false;
        info!("Wave 0 started");
        WaveStarted {
            index: 0,
            params: self.settings.wave(0),
        }
    }

    /// End the current wave and start the next one.
    ///
    /// Before the first wave this behaves like `start_first_wave` and no end
    /// notification is produced.
    pub fn advance_wave(&mut self) -> (Option<WaveEnded>, WaveStarted) {
        let Some(ending) = self.current_wave() else {
            return (None, self.start_first_wave());
        };

        self.current += 1;
        self.boss_spawned = false;
        info!("Wave {} started", self.current);

        let next = WaveStarted {
            index: ending + 1,
            params: self.settings.wave(self.current),
        };
        (Some(WaveEnded { index: ending }), next)
    }

    /// Seconds of game time before `wave` starts: the summed durations of
    /// waves `0..wave`.
    pub fn time_to_start(&self, wave: usize) -> f32 {
        (0..wave)
            .map(|i| self.settings.wave(i as i32).wave_duration)
            .fold(0.0, |total, duration| total + duration)
    }

    pub fn boss_spawned_this_wave(&self) -> bool {
        self.boss_spawned
    }

    pub fn mark_boss_spawned(&mut self) {
        self.boss_spawned = true;
    }

    /// Jump straight to `wave` when restoring a checkpoint.
    pub fn restore(&mut self, wave: i32) {
        self.current = wave.max(NOT_STARTED);
        self.boss_spawned = false;
    }

    /// Back to "not started" for a new session.
    pub fn reset(&mut self) {
        self.current = NOT_STARTED;
        self.boss_spawned = false;
    }
}
