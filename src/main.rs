//! Ghost Vacuum - headless demo entry point.
//!
//! Runs a full session against a stand-in player: spawners are driven by
//! the wave table in `assets/data/gameplay.ron`, and the app exits when the
//! game is over.

use bevy::app::ScheduleRunnerPlugin;
use bevy::hierarchy::HierarchyPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_rapier3d::prelude::*;
use std::time::Duration;

use ghost_vacuum::capture::CaptureDevice;
use ghost_vacuum::player::spawn_player;
use ghost_vacuum::session::{GameOverEvent, StartGame};
use ghost_vacuum::spawning::{IntervalVolumeSpawner, SingleDelayedSpawner, Spawner};
use ghost_vacuum::waves::WaveController;

fn main() {
    App::new()
        // Headless Bevy at 60 frames per second
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / 60.0),
        )))
        .add_plugins(LogPlugin::default())
        .add_plugins(StatesPlugin)
        .add_plugins((TransformPlugin, HierarchyPlugin))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Our game plugin
        .add_plugins(ghost_vacuum::GhostVacuumPlugin)

        .add_systems(Startup, setup_demo_scene)
        .add_systems(PostStartup, request_start)
        .add_systems(Update, exit_on_game_over)
        .run();
}

fn setup_demo_scene(mut commands: Commands, controller: Res<WaveController>) {
    spawn_player(
        &mut commands,
        Vec3::new(0.0, 1.6, 0.0),
        controller.settings().base_player_health,
    );

    commands.spawn((
        Name::new("Ghost Spawner"),
        Spawner::new(IntervalVolumeSpawner::new()),
        Transform::from_xyz(0.0, 2.0, -10.0),
    ));

    commands.spawn((
        Name::new("Boss Spawner"),
        Spawner::new(SingleDelayedSpawner::new()),
        Transform::from_xyz(0.0, 3.0, 12.0),
    ));

    commands.spawn((
        Name::new("Capture Device"),
        CaptureDevice::default(),
        Transform::from_xyz(6.0, 0.5, 6.0),
    ));

    info!("Demo scene ready");
}

fn request_start(mut start: EventWriter<StartGame>) {
    start.send(StartGame);
}

fn exit_on_game_over(mut game_over: EventReader<GameOverEvent>, mut exit: EventWriter<AppExit>) {
    for event in game_over.read() {
        info!("Session finished: {:?}", event.reason);
        exit.send(AppExit::Success);
    }
}
