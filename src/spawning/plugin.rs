//! Spawning plugin.

use bevy::prelude::*;

use super::components::{PrefabSpawned, TriggerSpawner};
use super::systems::*;
use crate::core::GameState;
use crate::session::SessionSet;

/// Spawning plugin - drives spawner entities from wave notifications.
pub struct SpawningPlugin;

impl Plugin for SpawningPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TriggerSpawner>()
            .add_event::<PrefabSpawned>()
            // Wave notifications are written by the session driver earlier
            // in the same frame
            .add_systems(
                Update,
                (start_spawners_on_wave, handle_spawn_triggers, tick_spawners)
                    .chain()
                    .after(SessionSet::Drive),
            )
            .add_systems(OnEnter(GameState::GameOver), cancel_all_spawners);
    }
}
