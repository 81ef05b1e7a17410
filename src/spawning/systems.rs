//! Spawner systems: wave subscription, ticking and placement.

use bevy::prelude::*;

use super::components::{PrefabSpawned, Spawner, TriggerSpawner};
use super::strategy::SpawnPayload;
use crate::capture::spawn_boss;
use crate::core::GameRng;
use crate::enemies::{acquire_ghost, GhostPool};
use crate::waves::{WaveController, WaveStarted};

/// Hand every wave start to every spawner; spawners that accept the wave
/// restart their sequence.
///
/// Spawners subscribe simply by existing. Despawning one unsubscribes it.
pub fn start_spawners_on_wave(
    mut wave_events: EventReader<WaveStarted>,
    mut spawners: Query<(Entity, &mut Spawner)>,
) {
    for event in wave_events.read() {
        for (entity, mut spawner) in spawners.iter_mut() {
            spawner.strategy_mut().configure(&event.params);
            if spawner.strategy().accepts(&event.params) {
                spawner.restart();
                debug!("Spawner {:?} started for wave {}", entity, event.index);
            }
        }
    }
}

/// Start spawners on explicit request.
pub fn handle_spawn_triggers(
    mut triggers: EventReader<TriggerSpawner>,
    mut spawners: Query<&mut Spawner>,
) {
    for trigger in triggers.read() {
        match spawners.get_mut(trigger.spawner) {
            Ok(mut spawner) => spawner.restart(),
            Err(_) => warn!("Spawn trigger for missing spawner {:?}", trigger.spawner),
        }
    }
}

/// Advance every spawner and place whatever became due.
pub fn tick_spawners(
    mut commands: Commands,
    time: Res<Time>,
    mut rng: ResMut<GameRng>,
    mut pool: ResMut<GhostPool>,
    mut controller: ResMut<WaveController>,
    mut spawners: Query<(Entity, &Transform, &mut Spawner)>,
    mut prefab_events: EventWriter<PrefabSpawned>,
) {
    let dt = time.delta();

    for (entity, anchor, mut spawner) in spawners.iter_mut() {
        let orders = spawner.tick(dt, &mut rng.0);

        for order in orders {
            let position = anchor.translation + order.offset;
            match order.payload {
                SpawnPayload::Ghost(params) => {
                    let ghost =
                        acquire_ghost(&mut commands, &mut pool, position, Quat::IDENTITY, &params);
                    debug!("Spawner {:?} placed ghost {:?} at {}", entity, ghost, position);
                }
                SpawnPayload::Boss => {
                    if controller.boss_spawned_this_wave() {
                        debug!("Boss already spawned this wave, skipping");
                        continue;
                    }
                    let boss = spawn_boss(&mut commands, position, anchor.rotation);
                    controller.mark_boss_spawned();
                    info!("Boss {:?} spawned at {}", boss, position);
                }
                SpawnPayload::Prefab(name) => {
                    info!("Spawner {:?} spawned prefab {}", entity, name);
                    prefab_events.send(PrefabSpawned {
                        name,
                        position,
                        rotation: anchor.rotation,
                    });
                }
            }
        }
    }
}

/// Stop every running sequence.
pub fn cancel_all_spawners(mut spawners: Query<&mut Spawner>) {
    for mut spawner in spawners.iter_mut() {
        spawner.strategy_mut().cancel();
    }
}
