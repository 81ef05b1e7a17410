//! Session state and the requests/notifications around it.

use bevy::prelude::*;

use super::checkpoint::GameCheckpoint;

/// Score awarded for capturing the boss.
pub const BOSS_BONUS: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    Victory,
    PlayerDeath,
    Timeout,
}

/// Score, clock and outcome of the running session.
#[derive(Resource, Debug, Default)]
pub struct GameSession {
    pub score: i32,
    /// Seconds since wave 0 started
    pub elapsed: f32,
    pub boss_defeated: bool,
    pub outcome: Option<GameOverReason>,
    pub checkpoint: Option<GameCheckpoint>,
}

impl GameSession {
    pub fn add_score(&mut self, amount: i32) -> i32 {
        self.score = self.score.saturating_add(amount);
        self.score
    }

    /// Clear everything except the stored checkpoint.
    pub fn reset(&mut self) {
        self.score = 0;
        self.elapsed = 0.0;
        self.boss_defeated = false;
        self.outcome = None;
    }

    pub fn snapshot(&self, wave: i32, player_health: f32) -> GameCheckpoint {
        GameCheckpoint {
            score: self.score,
            time: self.elapsed,
            wave,
            player_health,
            boss_defeated: self.boss_defeated,
        }
    }

    /// Copy session fields back from a checkpoint.
    pub fn apply(&mut self, checkpoint: &GameCheckpoint) {
        self.score = checkpoint.score;
        self.elapsed = checkpoint.time;
        self.boss_defeated = checkpoint.boss_defeated;
        self.outcome = None;
    }
}

/// Request to start a session. Only honoured in the lobby.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StartGame;

/// Request an explicit checkpoint.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SaveCheckpoint;

/// Request to roll back to the stored checkpoint.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RestoreCheckpoint;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverEvent {
    pub reason: GameOverReason,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreChanged {
    pub score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_and_apply_round_trip() {
        let mut session = GameSession {
            score: 250,
            elapsed: 73.5,
            boss_defeated: true,
            ..default()
        };
        let checkpoint = session.snapshot(1, 42.0);

        session.reset();
        session.apply(&checkpoint);
        assert_eq!(session.score, 250);
        assert_eq!(session.elapsed, 73.5);
        assert!(session.boss_defeated);
        assert_eq!(session.snapshot(1, 42.0), checkpoint);
    }

    #[test]
    fn reset_keeps_checkpoint() {
        let mut session = GameSession::default();
        session.add_score(10);
        session.checkpoint = Some(session.snapshot(0, 100.0));
        session.reset();
        assert_eq!(session.score, 0);
        assert!(session.checkpoint.is_some());
    }
}
