//! Integration test harness.
//!
//! Keep integration tests headless and deterministic:
//! - no `TimePlugin`: tests own the clock and advance `Time` by hand
//! - `FixedUpdate` is run explicitly, one fixed step per call
//! - the shared RNG is seeded

#![allow(dead_code)]

use bevy::core::TaskPoolPlugin;
use bevy::ecs::world::CommandQueue;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use std::time::Duration;

use ghost_vacuum::core::{DeathEvent, GameRng, GameState};
use ghost_vacuum::enemies::{acquire_ghost, Dormant, Ghost, GhostPool};
use ghost_vacuum::player::spawn_player;
use ghost_vacuum::waves::{GameplaySettings, WaveController, WaveParameters};
use ghost_vacuum::GhostVacuumPlugin;

/// One physics step at 64 Hz.
pub const STEP: Duration = Duration::from_micros(15625);

/// Every death notification seen so far.
#[derive(Resource, Default)]
pub struct DeathLog(pub Vec<DeathEvent>);

fn log_deaths(mut deaths: EventReader<DeathEvent>, mut log: ResMut<DeathLog>) {
    log.0.extend(deaths.read().cloned());
}

pub fn app_headless() -> App {
    app_with_pool(GhostPool::default())
}

/// Build the game with a specific pool, then run `Startup` once.
pub fn app_with_pool(pool: GhostPool) -> App {
    let mut app = App::new();
    app.add_plugins((TaskPoolPlugin::default(), StatesPlugin));
    app.init_resource::<Time>();
    app.add_plugins(GhostVacuumPlugin);

    app.insert_resource(pool);
    app.insert_resource(GameRng::seeded(42));
    app.init_resource::<DeathLog>();
    app.add_systems(Last, log_deaths);

    // Startup: pool warm-up and settings load
    app.update();
    app
}

/// Replace whatever settings were loaded at startup.
pub fn use_settings(app: &mut App, settings: GameplaySettings) {
    app.world_mut()
        .resource_mut::<WaveController>()
        .set_settings(settings);
}

pub fn settings_with(waves: Vec<WaveParameters>) -> GameplaySettings {
    GameplaySettings {
        max_waves: waves.len(),
        base_player_health: 100.0,
        waves,
    }
}

/// Run one frame (`Update` and friends) after advancing the clock by `dt`.
pub fn frame(app: &mut App, dt: Duration) {
    app.world_mut().resource_mut::<Time>().advance_by(dt);
    app.update();
}

/// Run one fixed step.
pub fn tick_fixed(app: &mut App) {
    app.world_mut().resource_mut::<Time>().advance_by(STEP);
    app.world_mut().run_schedule(FixedUpdate);
}

pub fn tick_fixed_n(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        tick_fixed(app);
    }
}

/// Run a closure against `Commands` and apply the result immediately.
pub fn with_commands<T>(app: &mut App, f: impl FnOnce(&mut Commands) -> T) -> T {
    let world = app.world_mut();
    let mut queue = CommandQueue::default();
    let out = {
        let mut commands = Commands::new(&mut queue, world);
        f(&mut commands)
    };
    queue.apply(world);
    out
}

pub fn acquire(app: &mut App, position: Vec3, params: &WaveParameters) -> Entity {
    let world = app.world_mut();
    let mut queue = CommandQueue::default();
    let entity = world.resource_scope(|world, mut pool: Mut<GhostPool>| {
        let mut commands = Commands::new(&mut queue, world);
        acquire_ghost(&mut commands, &mut pool, position, Quat::IDENTITY, params)
    });
    queue.apply(world);
    entity
}

pub fn add_player(app: &mut App, position: Vec3) -> Entity {
    with_commands(app, |commands| spawn_player(commands, position, 100.0))
}

pub fn active_ghosts(app: &mut App) -> Vec<Entity> {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, (With<Ghost>, Without<Dormant>)>();
    query.iter(world).collect()
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}
