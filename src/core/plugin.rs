//! Core plugin that sets up game states, events, and shared resources.

use bevy::prelude::*;

use super::events::*;
use super::rng::GameRng;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Lobby, Playing, GameOver)
/// - Global events (DamageEvent, HealEvent, HealthChanged, DeathEvent)
/// - The shared random number source
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<HealEvent>()
            .add_event::<HealthChanged>()
            .add_event::<DeathEvent>()

            .init_resource::<GameRng>();
    }
}
