//! Spawn strategy contract and the resumable timing sequence shared by the
//! timed variants.

use bevy::prelude::*;
use rand::RngCore;
use std::time::Duration;

use crate::waves::WaveParameters;

/// What a spawner asks the world to create.
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnPayload {
    /// A pooled ghost configured from these wave parameters
    Ghost(WaveParameters),
    /// The capture boss
    Boss,
    /// A named prefab for the host to instantiate
    Prefab(String),
}

/// One spawn request, placed relative to the spawner's anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnOrder {
    pub offset: Vec3,
    pub payload: SpawnPayload,
}

/// A spawn behavior driven by wave notifications and explicit triggers.
///
/// Strategies never touch the world. `tick` reports the spawns that became
/// due and the owning system places them.
pub trait SpawnStrategy: Send + Sync + 'static {
    /// Take the parameters of the wave that just started.
    fn configure(&mut self, params: &WaveParameters);

    /// Start a fresh sequence, cancelling one already in flight.
    fn spawn(&mut self);

    /// Stop the in-flight sequence, if any.
    fn cancel(&mut self);

    fn is_running(&self) -> bool;

    /// Whether a wave start with these parameters should start a sequence.
    fn accepts(&self, _params: &WaveParameters) -> bool {
        true
    }

    /// Advance by `dt` and return the spawns that became due.
    fn tick(&mut self, dt: Duration, rng: &mut dyn RngCore) -> Vec<SpawnOrder>;
}

/// "Wait, emit, wait, emit..." sequence advanced once per tick.
///
/// Elapsed time is carried over between emissions so long ticks still
/// produce every spawn that became due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnSequence {
    remaining: u32,
    wait: Duration,
    interval: Duration,
}

impl SpawnSequence {
    pub fn new(count: u32, initial_delay: Duration, interval: Duration) -> Self {
        Self {
            remaining: count,
            wait: initial_delay,
            interval,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Advance by `dt` and return how many spawns became due.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        let mut budget = dt;
        let mut due = 0;
        while self.remaining > 0 {
            if budget >= self.wait {
                budget -= self.wait;
                self.wait = self.interval;
                self.remaining -= 1;
                due += 1;
            } else {
                self.wait -= budget;
                break;
            }
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn zero_initial_delay_emits_immediately() {
        let mut sequence = SpawnSequence::new(3, Duration::ZERO, SECOND);
        assert_eq!(sequence.advance(Duration::ZERO), 1);
        assert_eq!(sequence.remaining(), 2);
    }

    #[test]
    fn emits_on_interval_until_count_reached() {
        let mut sequence = SpawnSequence::new(3, Duration::ZERO, SECOND);
        let mut times = Vec::new();
        let step = Duration::from_millis(250);
        let mut now = Duration::ZERO;

        for _ in 0..(sequence.advance(Duration::ZERO)) {
            times.push(now);
        }
        for _ in 0..40 {
            now += step;
            for _ in 0..sequence.advance(step) {
                times.push(now);
            }
        }

        assert_eq!(times, vec![Duration::ZERO, SECOND, 2 * SECOND]);
        assert!(sequence.is_finished());
    }

    #[test]
    fn long_tick_catches_up() {
        let mut sequence = SpawnSequence::new(5, Duration::from_millis(500), SECOND);
        assert_eq!(sequence.advance(Duration::from_millis(2600)), 3);
        assert_eq!(sequence.advance(Duration::from_millis(900)), 1);
        assert_eq!(sequence.remaining(), 1);
    }

    #[test]
    fn empty_sequence_is_finished() {
        let mut sequence = SpawnSequence::new(0, Duration::ZERO, SECOND);
        assert!(sequence.is_finished());
        assert_eq!(sequence.advance(SECOND), 0);
    }
}
