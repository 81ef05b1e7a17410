//! Ghost Vacuum - gameplay logic for a VR ghost-hunting horror game in Bevy.
//!
//! Ghosts roam, chase and dissolve while waves of them pour out of spawners;
//! a dragon boss circles the arena until a thrown capture device vacuums it
//! up. Rendering, animation, audio and the VR rig belong to the host app;
//! this crate publishes events for them and drives rigid bodies through
//! Rapier.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, shared randomness
//! - **Combat**: Health, damage and death notifications
//! - **Enemies**: Ghost state machine, steering, pooling
//! - **Waves**: Gameplay settings and wave progression
//! - **Spawning**: Spawn strategies driven by wave notifications
//! - **Capture**: Boss flight and the vacuum capture sequence
//! - **Session**: Game flow, score, game over and checkpoints

pub mod capture;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;
pub mod session;
pub mod spawning;
pub mod waves;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct GhostVacuumPlugin;

impl Plugin for GhostVacuumPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Combat systems
            .add_plugins(combat::CombatPlugin)

            // Wave configuration and progression
            .add_plugins(waves::WavePlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // Spawners
            .add_plugins(spawning::SpawningPlugin)

            // Boss and capture device
            .add_plugins(capture::CapturePlugin)

            // Session flow
            .add_plugins(session::SessionPlugin);
    }
}
