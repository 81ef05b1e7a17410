//! Spawner entities and the requests they exchange.

use bevy::prelude::*;
use rand::RngCore;
use std::time::Duration;

use super::strategy::{SpawnOrder, SpawnStrategy};

/// A spawn anchor. The entity's `Transform` is the anchor point.
#[derive(Component)]
pub struct Spawner {
    strategy: Box<dyn SpawnStrategy>,
    /// Started this frame; time elapsed before the start must not count.
    fresh: bool,
}

impl Spawner {
    pub fn new(strategy: impl SpawnStrategy) -> Self {
        Self {
            strategy: Box::new(strategy),
            fresh: false,
        }
    }

    /// Start the sequence over. Zero-delay spawns still come out on the next tick.
    pub fn restart(&mut self) {
        self.strategy.spawn();
        self.fresh = true;
    }

    /// Advance the sequence by `dt`, or by nothing right after a restart.
    pub fn tick(&mut self, dt: Duration, rng: &mut dyn RngCore) -> Vec<SpawnOrder> {
        let dt = if std::mem::take(&mut self.fresh) {
            Duration::ZERO
        } else {
            dt
        };
        self.strategy.tick(dt, rng)
    }

    pub fn strategy(&self) -> &dyn SpawnStrategy {
        self.strategy.as_ref()
    }

    pub fn strategy_mut(&mut self) -> &mut dyn SpawnStrategy {
        self.strategy.as_mut()
    }
}

/// Ask a spawner to start (or restart) its sequence outside of wave starts.
#[derive(Event, Debug, Clone, Copy)]
pub struct TriggerSpawner {
    pub spawner: Entity,
}

/// A one-shot spawner produced a prefab for the host to instantiate.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PrefabSpawned {
    pub name: String,
    pub position: Vec3,
    pub rotation: Quat,
}
