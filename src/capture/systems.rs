//! Capture systems - boss flight, device engagement and the capture itself.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{Boss, CaptureDevice, CaptureGrace};
use super::flight::{BossFlight, BossWaypoints};
use super::sequence::CaptureSequence;
use crate::combat::Dead;
use crate::core::{Casualty, DeathEvent};

/// Fly every free boss along the waypoint circuit.
pub fn fly_bosses(
    time: Res<Time>,
    waypoints: Res<BossWaypoints>,
    mut bosses: Query<
        (&mut BossFlight, &mut Transform, &mut Velocity, &CaptureSequence),
        (With<Boss>, Without<Dead>),
    >,
) {
    let dt = time.delta_secs();
    for (mut flight, mut transform, mut velocity, capture) in bosses.iter_mut() {
        if capture.is_engaged() {
            continue;
        }
        flight.step(&waypoints.0, &mut transform, &mut velocity.linvel, dt);
    }
}

/// Drop engagements whose boss is dead or gone.
pub fn release_capture_devices(
    mut devices: Query<&mut CaptureDevice>,
    live_bosses: Query<(), (With<Boss>, Without<Dead>)>,
) {
    for mut device in devices.iter_mut() {
        if let Some(boss) = device.engaged() {
            if live_bosses.get(boss).is_err() {
                device.release();
            }
        }
    }
}

/// Idle devices start capturing the first free boss within their radius.
pub fn engage_capture_devices(
    mut devices: Query<(Entity, &Transform, &mut CaptureDevice), Without<Boss>>,
    mut bosses: Query<
        (Entity, &Transform, &mut CaptureSequence, &mut Velocity),
        (With<Boss>, Without<Dead>),
    >,
) {
    for (device_entity, device_transform, mut device) in devices.iter_mut() {
        if device.engaged().is_some() {
            continue;
        }

        for (boss, boss_transform, mut capture, mut velocity) in bosses.iter_mut() {
            if !device.in_range(device_transform.translation, boss_transform.translation) {
                continue;
            }
            if capture.trigger(device_entity, device_transform.translation, boss_transform) {
                *velocity = Velocity::zero();
                device.engage(boss);
                info!("Capture device {:?} engaged boss {:?}", device_entity, boss);
                break;
            }
        }
    }
}

/// Advance running captures; a finished capture kills the boss.
pub fn advance_captures(
    mut commands: Commands,
    time: Res<Time>,
    devices: Query<&Transform, (With<CaptureDevice>, Without<Boss>)>,
    mut bosses: Query<(Entity, &mut CaptureSequence, &mut Transform), (With<Boss>, Without<Dead>)>,
    mut death_events: EventWriter<DeathEvent>,
) {
    for (entity, mut capture, mut transform) in bosses.iter_mut() {
        if !capture.is_running() {
            continue;
        }

        if let Some(device) = capture.device() {
            if let Ok(device_transform) = devices.get(device) {
                capture.retarget(device_transform.translation);
            }
        }

        if capture.advance(time.delta(), &mut transform) {
            commands.entity(entity).insert((
                Dead,
                ColliderDisabled,
                Velocity::zero(),
                CaptureGrace::default(),
            ));
            death_events.send(DeathEvent {
                entity,
                killed_by: capture.device(),
                casualty: Casualty::Boss,
            });
            info!("Boss {:?} captured", entity);
        }
    }
}

/// Remove captured bosses once their grace period is over.
pub fn despawn_captured(
    mut commands: Commands,
    time: Res<Time>,
    mut captured: Query<(Entity, &mut CaptureGrace)>,
) {
    for (entity, mut grace) in captured.iter_mut() {
        grace.0.tick(time.delta());
        if grace.0.finished() {
            commands.entity(entity).despawn_recursive();
        }
    }
}
