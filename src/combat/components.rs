//! Combat-related components.

use bevy::prelude::*;

// Re-export from core to avoid duplication
pub use crate::core::{Casualty, DamageEvent, DeathEvent, HealEvent, HealthChanged};

/// Result of applying damage to a `Health` pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    /// Health left after the hit
    pub remaining: f32,
    /// True only when this hit took the entity from alive to dead
    pub died: bool,
}

/// Component for entities that can take damage (ghosts and the player).
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    pub current: f32,
    pub maximum: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Apply damage. Death is edge-triggered: `died` is only reported on the
    /// hit that crosses from alive to dead, never on later hits.
    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        let was_alive = !self.is_dead();
        let actual = amount.max(0.0).min(self.current.max(0.0));
        self.current -= actual;
        DamageOutcome {
            remaining: self.current,
            died: was_alive && self.is_dead(),
        }
    }

    /// Heal up to the maximum and return the new current health.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.maximum - self.current);
        self.current += actual.max(0.0);
        self.current
    }

    /// Overwrite current health, clamped to `[0, maximum]`.
    pub fn set(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.maximum);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percentage(&self) -> f32 {
        if self.maximum <= 0.0 {
            return 0.0;
        }
        self.current / self.maximum
    }
}

/// Marker for entities that died outside the `Health` path (the captured boss).
#[derive(Component, Debug)]
pub struct Dead;
