mod common;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use std::time::Duration;

use common::*;
use ghost_vacuum::combat::Health;
use ghost_vacuum::core::{Casualty, DamageEvent};
use ghost_vacuum::enemies::{Dormant, FreezeFocus, GhostBrain, GhostPool, GhostStateKind, PoolPolicy};
use ghost_vacuum::waves::WaveParameters;

fn hit(app: &mut App, target: Entity, amount: f32) {
    app.world_mut().send_event(DamageEvent {
        target,
        source: None,
        amount,
        position: Vec3::ZERO,
        normal: Vec3::Y,
    });
    frame(app, Duration::ZERO);
}

fn kind(app: &App, ghost: Entity) -> Option<GhostStateKind> {
    app.world().get::<GhostBrain>(ghost).and_then(GhostBrain::kind)
}

#[test]
fn lethal_hit_dissolves_and_returns_after_two_seconds() {
    let mut app = app_headless();
    add_player(&mut app, Vec3::new(100.0, 0.0, 100.0));
    let before = app.world().resource::<GhostPool>().available();

    let ghost = acquire(&mut app, Vec3::new(0.0, 1.0, 0.0), &WaveParameters::default());
    assert_eq!(app.world().resource::<GhostPool>().available(), before - 1);

    tick_fixed(&mut app);
    assert_eq!(kind(&app, ghost), Some(GhostStateKind::Roam));

    hit(&mut app, ghost, 10.0);
    let deaths = &app.world().resource::<DeathLog>().0;
    assert_eq!(deaths.len(), 1);
    assert_eq!(deaths[0].entity, ghost);
    assert_eq!(deaths[0].casualty, Casualty::Ghost);
    assert!(app.world().get::<ColliderDisabled>(ghost).is_some());

    // Overkill does not die twice
    hit(&mut app, ghost, 10.0);
    assert_eq!(app.world().resource::<DeathLog>().0.len(), 1);

    tick_fixed(&mut app);
    assert_eq!(kind(&app, ghost), Some(GhostStateKind::Dissolve));

    tick_fixed_n(&mut app, 127);
    assert!(app.world().get::<Dormant>(ghost).is_none());
    assert_eq!(app.world().resource::<GhostPool>().available(), before - 1);

    tick_fixed(&mut app);
    assert!(app.world().get::<Dormant>(ghost).is_some());
    assert_eq!(app.world().resource::<GhostPool>().available(), before);
}

#[test]
fn recycled_ghost_is_reset_from_new_parameters() {
    let mut app = app_with_pool(GhostPool::new(1, PoolPolicy::Recycle));
    add_player(&mut app, Vec3::new(100.0, 0.0, 100.0));

    let ghost = acquire(&mut app, Vec3::ZERO, &WaveParameters::default());
    tick_fixed(&mut app);
    hit(&mut app, ghost, 50.0);
    tick_fixed_n(&mut app, 129);
    assert!(app.world().get::<Dormant>(ghost).is_some());

    let params = WaveParameters {
        health: 25.0,
        ..default()
    };
    let again = acquire(&mut app, Vec3::new(3.0, 1.0, -2.0), &params);
    assert_eq!(again, ghost);

    let world = app.world();
    assert_eq!(world.get::<Health>(ghost), Some(&Health::new(25.0)));
    assert!(world.get::<Dormant>(ghost).is_none());
    assert!(world.get::<ColliderDisabled>(ghost).is_none());
    assert_eq!(world.get::<Velocity>(ghost).map(|v| v.linvel), Some(Vec3::ZERO));
    assert_eq!(
        world.get::<Transform>(ghost).map(|t| t.translation),
        Some(Vec3::new(3.0, 1.0, -2.0))
    );
    assert_eq!(kind(&app, ghost), None);
    assert_eq!(app.world().resource::<GhostPool>().capacity(), 1);
}

#[test]
fn empty_pool_grows_on_demand() {
    let mut app = app_with_pool(GhostPool::new(0, PoolPolicy::Recycle));
    let a = acquire(&mut app, Vec3::ZERO, &WaveParameters::default());
    let b = acquire(&mut app, Vec3::ONE, &WaveParameters::default());

    assert_ne!(a, b);
    let pool = app.world().resource::<GhostPool>();
    assert_eq!(pool.capacity(), 2);
    assert_eq!(pool.in_use(), 2);
    assert_eq!(pool.available(), 0);
}

#[test]
fn destroy_policy_despawns_dissolved_ghosts() {
    let mut app = app_with_pool(GhostPool::new(0, PoolPolicy::Destroy));
    let ghost = acquire(&mut app, Vec3::ZERO, &WaveParameters::default());

    tick_fixed(&mut app);
    hit(&mut app, ghost, 10.0);
    tick_fixed_n(&mut app, 129);

    assert!(!app.world().entities().contains(ghost));
    assert_eq!(app.world().resource::<GhostPool>().in_use(), 0);
}

#[test]
fn nearby_player_is_chased_and_struck() {
    let mut app = app_headless();
    let player = add_player(&mut app, Vec3::new(1.0, 1.0, 0.0));
    let params = WaveParameters {
        attack_damage: 4.0,
        attack_cooldown: 2.0,
        ..default()
    };
    let ghost = acquire(&mut app, Vec3::new(0.0, 1.0, 0.0), &params);

    // Enter roam, then spot the player
    tick_fixed_n(&mut app, 2);
    assert_eq!(kind(&app, ghost), Some(GhostStateKind::Chase));
    assert_eq!(app.world().resource::<FreezeFocus>().target(), Some(ghost));

    // In range: first strike is immediate
    tick_fixed(&mut app);
    frame(&mut app, Duration::ZERO);
    assert_eq!(app.world().get::<Health>(player).map(|h| h.current), Some(96.0));

    // Next strike waits out the cooldown
    tick_fixed_n(&mut app, 127);
    frame(&mut app, Duration::ZERO);
    assert_eq!(app.world().get::<Health>(player).map(|h| h.current), Some(96.0));
    tick_fixed(&mut app);
    frame(&mut app, Duration::ZERO);
    assert_eq!(app.world().get::<Health>(player).map(|h| h.current), Some(92.0));
}

#[test]
fn ghosts_keep_roaming_without_a_player() {
    let mut app = app_headless();
    let ghost = acquire(&mut app, Vec3::ZERO, &WaveParameters::default());

    tick_fixed_n(&mut app, 300);
    assert_eq!(kind(&app, ghost), Some(GhostStateKind::Roam));
}
