//! Spawning module - spawn strategies and the spawner entities that run them.

mod components;
mod plugin;
mod spawners;
mod strategy;
mod systems;

pub use components::*;
pub use plugin::SpawningPlugin;
pub use spawners::{IntervalVolumeSpawner, OneShotSpawner, SingleDelayedSpawner};
pub use strategy::{SpawnOrder, SpawnPayload, SpawnSequence, SpawnStrategy};
