//! Enemy AI systems: drive every active ghost's state machine each fixed step.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::animation::GhostAnimationCue;
use super::brain::{facing_rotation, BrainContext, BrainEffect, GhostBrain, FACE_TURN_RATE};
use super::components::{Dormant, Ghost, GhostStats};
use super::focus::FreezeFocus;
use super::pool::{release_ghost, GhostPool, PoolSlot};
use super::steering::{integrate, steering_acceleration};
use crate::combat::{DamageEvent, Health};
use crate::core::GameRng;
use crate::player::Player;

/// Tick ghost state machines and apply the effects they request.
///
/// Runs in `FixedUpdate` so steering stays in step with the physics.
#[allow(clippy::too_many_arguments)]
pub fn tick_ghost_brains(
    mut commands: Commands,
    time: Res<Time>,
    mut rng: ResMut<GameRng>,
    mut pool: ResMut<GhostPool>,
    mut focus: ResMut<FreezeFocus>,
    player_query: Query<(Entity, &Transform), (With<Player>, Without<Ghost>)>,
    mut ghost_query: Query<
        (
            Entity,
            &PoolSlot,
            &mut Transform,
            &mut Velocity,
            &Health,
            &GhostStats,
            &mut GhostBrain,
        ),
        (With<Ghost>, Without<Dormant>, Without<Player>),
    >,
    mut cues: EventWriter<GhostAnimationCue>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    // Re-resolved every tick; no player simply means nothing to chase yet.
    let player = player_query
        .get_single()
        .ok()
        .map(|(entity, transform)| (entity, transform.translation));

    let dt = time.delta();
    let dt_secs = dt.as_secs_f32();

    for (entity, slot, mut transform, mut velocity, health, stats, mut brain) in
        ghost_query.iter_mut()
    {
        let ctx = BrainContext {
            position: transform.translation,
            player: player.map(|(_, position)| position),
            dead: health.is_dead(),
            stats,
            dt,
        };

        let before = brain.kind();
        let effects = brain.tick(&ctx, &mut rng.0);
        if brain.kind() != before {
            debug!("{:?} switched {:?} -> {:?}", entity, before, brain.kind());
        }

        for effect in effects {
            match effect {
                BrainEffect::Animate(clip) => {
                    cues.send(GhostAnimationCue { entity, clip });
                }
                BrainEffect::SteerToward(target) => {
                    let acceleration = steering_acceleration(
                        transform.translation,
                        velocity.linvel,
                        target,
                        stats.max_velocity,
                        stats.max_acceleration,
                        dt_secs,
                    );
                    velocity.linvel = integrate(velocity.linvel, acceleration, dt_secs);
                }
                BrainEffect::Hover => {
                    velocity.linvel.x = 0.0;
                    velocity.linvel.z = 0.0;
                }
                BrainEffect::Face(point) => {
                    if let Some(target) = facing_rotation(transform.translation, point) {
                        let t = (FACE_TURN_RATE * dt_secs).min(1.0);
                        transform.rotation = transform.rotation.slerp(target, t);
                    }
                }
                BrainEffect::FocusFreeze => {
                    focus.set(entity);
                }
                BrainEffect::Strike(amount) => {
                    if let Some((player_entity, player_position)) = player {
                        damage_events.send(DamageEvent {
                            target: player_entity,
                            source: Some(entity),
                            amount,
                            position: player_position,
                            normal: Vec3::ZERO,
                        });
                    }
                }
                BrainEffect::Release => {
                    if release_ghost(&mut commands, &mut pool, entity, *slot) {
                        focus.clear_if(entity);
                        debug!("{:?} returned to the pool", entity);
                    }
                }
            }
        }
    }
}
