//! Enemy plugin - registers the pool, the state machine and its outputs.

use bevy::prelude::*;

use super::ai;
use super::animation::GhostAnimationCue;
use super::focus::FreezeFocus;
use super::pool::{warm_up_pool, GhostPool};
use crate::core::GameState;

/// Enemy plugin - handles ghost pooling and AI.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GhostPool>()
            .init_resource::<FreezeFocus>()
            .add_event::<GhostAnimationCue>()
            .add_systems(Startup, warm_up_pool)
            // State machines run on the fixed step alongside physics
            .add_systems(
                FixedUpdate,
                ai::tick_ghost_brains.run_if(not(in_state(GameState::GameOver))),
            );
    }
}
