//! Game state definitions that control the overall flow of a session.
//!
//! States determine which systems run at any given time. The wave driver and
//! scoring only run while `Playing`; starting a game is only honoured from
//! the `Lobby`.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Lobby` until the player switches the flashlight on
/// - `Playing` while waves are running
/// - `GameOver` once the player dies, time runs out, or the boss is captured
///   and the final wave ends
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Waiting for the first wave to be started
    #[default]
    Lobby,
    /// Active gameplay
    Playing,
    /// Session finished, see `GameOverEvent` for the reason
    GameOver,
}
