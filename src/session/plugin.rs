//! Session plugin.

use bevy::prelude::*;

use super::resources::*;
use super::systems::*;
use crate::combat::CombatSet;
use crate::core::GameState;

/// System set ordering for the session.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SessionSet {
    /// Start requests, checkpoint restores and wave progression
    Drive,
    /// Scoring and game over from deaths
    Score,
}

/// Session plugin - game flow, score and checkpoints.
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSession>()
            .add_event::<StartGame>()
            .add_event::<SaveCheckpoint>()
            .add_event::<RestoreCheckpoint>()
            .add_event::<GameOverEvent>()
            .add_event::<ScoreChanged>()
            .add_systems(
                Update,
                (
                    start_game,
                    restore_checkpoint,
                    drive_waves.run_if(in_state(GameState::Playing)),
                )
                    .chain()
                    .in_set(SessionSet::Drive),
            )
            .add_systems(
                Update,
                (
                    record_deaths.run_if(in_state(GameState::Playing)),
                    save_checkpoint,
                )
                    .chain()
                    .in_set(SessionSet::Score)
                    .after(CombatSet::Resolve)
                    .after(SessionSet::Drive),
            );
    }
}
