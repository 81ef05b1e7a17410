//! Session systems - start, wave driving, scoring, game over and checkpoints.

use bevy::prelude::*;

use super::resources::*;
use crate::capture::Boss;
use crate::combat::{Dead, Health};
use crate::core::{Casualty, DeathEvent, GameState};
use crate::player::Player;
use crate::waves::{WaveController, WaveEnded, WaveStarted};

fn player_health(players: &Query<&Health, With<Player>>) -> f32 {
    players
        .get_single()
        .map(|health| health.current)
        .unwrap_or_default()
}

fn finish(
    session: &mut GameSession,
    next_state: &mut NextState<GameState>,
    game_over: &mut EventWriter<GameOverEvent>,
    reason: GameOverReason,
) {
    if session.outcome.is_some() {
        return;
    }
    session.outcome = Some(reason);
    next_state.set(GameState::GameOver);
    game_over.send(GameOverEvent { reason });
    info!(
        "Game over ({:?}) at {:.1}s with score {}",
        reason, session.elapsed, session.score
    );
}

/// Start a new session from the lobby.
#[allow(clippy::too_many_arguments)]
pub fn start_game(
    mut requests: EventReader<StartGame>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut session: ResMut<GameSession>,
    mut controller: ResMut<WaveController>,
    mut players: Query<&mut Health, With<Player>>,
    mut wave_started: EventWriter<WaveStarted>,
    mut score_changed: EventWriter<ScoreChanged>,
) {
    if requests.read().count() == 0 {
        return;
    }
    if *state.get() != GameState::Lobby || controller.is_started() {
        warn!("StartGame ignored in {:?}", state.get());
        return;
    }

    session.reset();
    controller.reset();

    let base_health = controller.settings().base_player_health;
    for mut health in players.iter_mut() {
        *health = Health::new(base_health);
    }

    wave_started.send(controller.start_first_wave());
    score_changed.send(ScoreChanged { score: 0 });
    next_state.set(GameState::Playing);
    info!("Game started");
}

/// Advance waves on elapsed-time thresholds and end the game when the last
/// wave runs out.
#[allow(clippy::too_many_arguments)]
pub fn drive_waves(
    time: Res<Time>,
    mut session: ResMut<GameSession>,
    mut controller: ResMut<WaveController>,
    mut next_state: ResMut<NextState<GameState>>,
    players: Query<&Health, With<Player>>,
    mut wave_started: EventWriter<WaveStarted>,
    mut wave_ended: EventWriter<WaveEnded>,
    mut game_over: EventWriter<GameOverEvent>,
) {
    if session.outcome.is_some() {
        return;
    }
    session.elapsed += time.delta_secs();

    loop {
        let next = controller.current_wave().map_or(0, |wave| wave + 1);
        if next >= controller.max_waves() || session.elapsed < controller.time_to_start(next) {
            break;
        }

        let (ended, started) = controller.advance_wave();
        if let Some(ended) = ended {
            wave_ended.send(ended);
        }
        wave_started.send(started);

        let checkpoint = session.snapshot(controller.current_index(), player_health(&players));
        debug!("Checkpoint saved: {:?}", checkpoint);
        session.checkpoint = Some(checkpoint);
    }

    if session.elapsed >= controller.time_to_start(controller.max_waves()) {
        let reason = if session.boss_defeated {
            GameOverReason::Victory
        } else {
            GameOverReason::Timeout
        };
        finish(&mut session, &mut next_state, &mut game_over, reason);
    }
}

/// Score kills and end the game when the player dies.
pub fn record_deaths(
    mut deaths: EventReader<DeathEvent>,
    mut session: ResMut<GameSession>,
    controller: Res<WaveController>,
    mut next_state: ResMut<NextState<GameState>>,
    mut score_changed: EventWriter<ScoreChanged>,
    mut game_over: EventWriter<GameOverEvent>,
) {
    for death in deaths.read() {
        match death.casualty {
            Casualty::Ghost => {
                let value = controller.current_parameters().score_value;
                let score = session.add_score(i32::try_from(value).unwrap_or(i32::MAX));
                score_changed.send(ScoreChanged { score });
            }
            Casualty::Boss => {
                session.boss_defeated = true;
                let score = session.add_score(BOSS_BONUS);
                score_changed.send(ScoreChanged { score });
                info!("Boss defeated");
            }
            Casualty::Player => {
                finish(
                    &mut session,
                    &mut next_state,
                    &mut game_over,
                    GameOverReason::PlayerDeath,
                );
            }
            Casualty::Other => {}
        }
    }
}

/// Store a checkpoint on request.
pub fn save_checkpoint(
    mut requests: EventReader<SaveCheckpoint>,
    mut session: ResMut<GameSession>,
    controller: Res<WaveController>,
    players: Query<&Health, With<Player>>,
) {
    if requests.read().count() == 0 {
        return;
    }
    let checkpoint = session.snapshot(controller.current_index(), player_health(&players));
    info!("Checkpoint saved at {:.1}s", checkpoint.time);
    session.checkpoint = Some(checkpoint);
}

/// Roll the session back to the stored checkpoint.
///
/// Restoring after game over resumes play and restarts the spawners for
/// the restored wave. A boss that is still alive counts as this wave's boss.
#[allow(clippy::too_many_arguments)]
pub fn restore_checkpoint(
    mut requests: EventReader<RestoreCheckpoint>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut session: ResMut<GameSession>,
    mut controller: ResMut<WaveController>,
    mut players: Query<&mut Health, With<Player>>,
    live_bosses: Query<(), (With<Boss>, Without<Dead>)>,
    mut wave_started: EventWriter<WaveStarted>,
    mut score_changed: EventWriter<ScoreChanged>,
) {
    if requests.read().count() == 0 {
        return;
    }
    if *state.get() == GameState::Lobby {
        warn!("RestoreCheckpoint ignored in the lobby");
        return;
    }
    let Some(checkpoint) = session.checkpoint.clone() else {
        warn!("No checkpoint to restore");
        return;
    };

    session.apply(&checkpoint);
    controller.restore(checkpoint.wave);
    if !live_bosses.is_empty() {
        controller.mark_boss_spawned();
    }
    for mut health in players.iter_mut() {
        health.set(checkpoint.player_health);
    }
    score_changed.send(ScoreChanged {
        score: checkpoint.score,
    });

    if *state.get() == GameState::GameOver {
        if let Some(index) = controller.current_wave() {
            wave_started.send(WaveStarted {
                index,
                params: controller.current_parameters(),
            });
        }
        next_state.set(GameState::Playing);
    }
    info!(
        "Checkpoint restored: wave {}, {:.1}s, score {}",
        checkpoint.wave, checkpoint.time, checkpoint.score
    );
}
