//! Enemy-related components.

use bevy::prelude::*;
use std::time::Duration;

use crate::waves::WaveParameters;

/// Marker component for all ghosts.
#[derive(Component)]
pub struct Ghost;

/// Marker for pooled ghosts that are parked and must not be simulated.
#[derive(Component)]
pub struct Dormant;

/// Ghost stats snapshot taken from the wave that spawned it.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct GhostStats {
    pub max_velocity: f32,
    pub max_acceleration: f32,
    pub chase_distance: f32,
    pub attack_damage: f32,
    pub attack_cooldown: Duration,
}

impl Default for GhostStats {
    fn default() -> Self {
        Self::from(&WaveParameters::default())
    }
}

impl From<&WaveParameters> for GhostStats {
    fn from(params: &WaveParameters) -> Self {
        Self {
            max_velocity: params.max_velocity,
            max_acceleration: params.max_acceleration,
            chase_distance: params.chase_distance,
            attack_damage: params.attack_damage,
            attack_cooldown: params.attack_interval(),
        }
    }
}
