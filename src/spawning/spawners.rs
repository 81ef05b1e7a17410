//! Concrete spawn strategies.

use bevy::prelude::*;
use rand::{Rng, RngCore};
use std::time::Duration;

use super::strategy::{SpawnOrder, SpawnPayload, SpawnSequence, SpawnStrategy};
use crate::waves::WaveParameters;

/// Spawns the wave's ghosts one by one inside a box around the anchor.
///
/// After the initial delay one ghost appears every `spawn_delay` seconds at
/// a uniformly random offset within `spawn_volume`, until `spawn_count`
/// ghosts have been placed.
#[derive(Debug, Default)]
pub struct IntervalVolumeSpawner {
    params: Option<WaveParameters>,
    sequence: Option<SpawnSequence>,
}

impl IntervalVolumeSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> u32 {
        self.sequence.as_ref().map_or(0, SpawnSequence::remaining)
    }
}

fn offset_in_box(extent: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    let mut axis = |half: f32| {
        // Unbounded axes collapse onto the anchor
        let half = if half.is_finite() { half.abs() } else { 0.0 };
        rng.gen_range(-half..=half)
    };
    Vec3::new(axis(extent.x), axis(extent.y), axis(extent.z))
}

impl SpawnStrategy for IntervalVolumeSpawner {
    fn configure(&mut self, params: &WaveParameters) {
        self.params = Some(params.clone());
    }

    fn spawn(&mut self) {
        self.cancel();
        let params = self.params.get_or_insert_with(WaveParameters::default);
        self.sequence = Some(SpawnSequence::new(
            params.spawn_count,
            params.initial_delay(),
            params.spawn_interval(),
        ));
    }

    fn cancel(&mut self) {
        self.sequence = None;
    }

    fn is_running(&self) -> bool {
        self.sequence.is_some()
    }

    fn tick(&mut self, dt: Duration, rng: &mut dyn RngCore) -> Vec<SpawnOrder> {
        let (Some(sequence), Some(params)) = (self.sequence.as_mut(), self.params.as_ref()) else {
            return Vec::new();
        };

        let due = sequence.advance(dt);
        let extent = params.spawn_extent();
        let orders = (0..due)
            .map(|_| SpawnOrder {
                offset: offset_in_box(extent, rng),
                payload: SpawnPayload::Ghost(params.clone()),
            })
            .collect();

        if sequence.is_finished() {
            self.sequence = None;
        }
        orders
    }
}

/// Spawns the boss once at the anchor, after the wave's initial delay.
/// Only waves flagged `spawn_boss` start it.
#[derive(Debug, Default)]
pub struct SingleDelayedSpawner {
    delay: Duration,
    sequence: Option<SpawnSequence>,
}

impl SingleDelayedSpawner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpawnStrategy for SingleDelayedSpawner {
    fn configure(&mut self, params: &WaveParameters) {
        self.delay = params.initial_delay();
    }

    fn spawn(&mut self) {
        self.cancel();
        self.sequence = Some(SpawnSequence::new(1, self.delay, Duration::ZERO));
    }

    fn cancel(&mut self) {
        self.sequence = None;
    }

    fn is_running(&self) -> bool {
        self.sequence.is_some()
    }

    fn accepts(&self, params: &WaveParameters) -> bool {
        params.spawn_boss
    }

    fn tick(&mut self, dt: Duration, _rng: &mut dyn RngCore) -> Vec<SpawnOrder> {
        let Some(sequence) = self.sequence.as_mut() else {
            return Vec::new();
        };
        if sequence.advance(dt) == 0 {
            return Vec::new();
        }

        self.sequence = None;
        vec![SpawnOrder {
            offset: Vec3::ZERO,
            payload: SpawnPayload::Boss,
        }]
    }
}

/// Spawns one named prefab at the anchor on the next tick after `spawn`.
///
/// Ignores wave starts; it only runs on an explicit trigger.
#[derive(Debug)]
pub struct OneShotSpawner {
    prefab: String,
    pending: bool,
}

impl OneShotSpawner {
    pub fn new(prefab: impl Into<String>) -> Self {
        Self {
            prefab: prefab.into(),
            pending: false,
        }
    }

    pub fn prefab(&self) -> &str {
        &self.prefab
    }
}

impl SpawnStrategy for OneShotSpawner {
    fn configure(&mut self, _params: &WaveParameters) {}

    fn spawn(&mut self) {
        self.pending = true;
    }

    fn cancel(&mut self) {
        self.pending = false;
    }

    fn is_running(&self) -> bool {
        self.pending
    }

    fn accepts(&self, _params: &WaveParameters) -> bool {
        false
    }

    fn tick(&mut self, _dt: Duration, _rng: &mut dyn RngCore) -> Vec<SpawnOrder> {
        if !std::mem::take(&mut self.pending) {
            return Vec::new();
        }
        vec![SpawnOrder {
            offset: Vec3::ZERO,
            payload: SpawnPayload::Prefab(self.prefab.clone()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SECOND: Duration = Duration::from_secs(1);

    fn wave(count: u32, delay: f32, initial: f32) -> WaveParameters {
        WaveParameters {
            spawn_count: count,
            spawn_delay: delay,
            initial_spawn_delay: initial,
            ..default()
        }
    }

    #[test]
    fn interval_spawner_places_ghosts_inside_volume() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut spawner = IntervalVolumeSpawner::new();
        let params = WaveParameters {
            spawn_volume: (1.0, 0.5, 2.0),
            ..wave(50, 0.0, 0.0)
        };
        spawner.configure(&params);
        spawner.spawn();

        let orders = spawner.tick(SECOND, &mut rng);
        assert_eq!(orders.len(), 50);
        for order in orders {
            assert!(order.offset.x.abs() <= 1.0);
            assert!(order.offset.y.abs() <= 0.5);
            assert!(order.offset.z.abs() <= 2.0);
            assert_eq!(order.payload, SpawnPayload::Ghost(params.clone()));
        }
        assert!(!spawner.is_running());
    }

    #[test]
    fn non_finite_extent_spawns_on_the_anchor_axis() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let offset = offset_in_box(Vec3::new(f32::INFINITY, f32::NAN, 1.0), &mut rng);
            assert_eq!(offset.x, 0.0);
            assert_eq!(offset.y, 0.0);
            assert!(offset.z.abs() <= 1.0);
        }
    }

    #[test]
    fn interval_spawner_stops_after_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut spawner = IntervalVolumeSpawner::new();
        spawner.configure(&wave(3, 1.0, 0.0));
        spawner.spawn();

        let mut per_tick = vec![spawner.tick(Duration::ZERO, &mut rng).len()];
        for _ in 0..5 {
            per_tick.push(spawner.tick(SECOND, &mut rng).len());
        }

        assert_eq!(per_tick, vec![1, 1, 1, 0, 0, 0]);
        assert!(!spawner.is_running());
    }

    #[test]
    fn restarting_replaces_the_running_sequence() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut spawner = IntervalVolumeSpawner::new();
        spawner.configure(&wave(4, 1.0, 0.5));
        spawner.spawn();
        assert_eq!(spawner.tick(Duration::from_millis(1600), &mut rng).len(), 2);
        assert_eq!(spawner.remaining(), 2);

        spawner.spawn();
        assert_eq!(spawner.remaining(), 4);
        // The fresh sequence waits out the initial delay again.
        assert!(spawner.tick(Duration::from_millis(400), &mut rng).is_empty());
        assert_eq!(spawner.tick(Duration::from_millis(100), &mut rng).len(), 1);
    }

    #[test]
    fn cancel_stops_spawning() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut spawner = IntervalVolumeSpawner::new();
        spawner.configure(&wave(3, 1.0, 0.0));
        spawner.spawn();
        spawner.cancel();
        assert!(spawner.tick(SECOND * 10, &mut rng).is_empty());
    }

    #[test]
    fn unconfigured_interval_spawner_uses_fallback_parameters() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut spawner = IntervalVolumeSpawner::new();
        spawner.spawn();
        assert_eq!(spawner.remaining(), WaveParameters::default().spawn_count);
        assert_eq!(spawner.tick(Duration::ZERO, &mut rng).len(), 1);
    }

    #[test]
    fn boss_spawner_only_accepts_boss_waves() {
        let spawner = SingleDelayedSpawner::new();
        assert!(!spawner.accepts(&WaveParameters::default()));
        assert!(spawner.accepts(&WaveParameters {
            spawn_boss: true,
            ..default()
        }));
    }

    #[test]
    fn boss_spawner_fires_once_after_delay() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut spawner = SingleDelayedSpawner::new();
        spawner.configure(&WaveParameters {
            spawn_boss: true,
            initial_spawn_delay: 5.0,
            ..default()
        });
        spawner.spawn();

        assert!(spawner.tick(Duration::from_secs(4), &mut rng).is_empty());
        let orders = spawner.tick(SECOND, &mut rng);
        assert_eq!(
            orders,
            vec![SpawnOrder {
                offset: Vec3::ZERO,
                payload: SpawnPayload::Boss
            }]
        );
        assert!(spawner.tick(SECOND * 60, &mut rng).is_empty());
        assert!(!spawner.is_running());
    }

    #[test]
    fn one_shot_spawns_once_per_trigger() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut spawner = OneShotSpawner::new("ReleaseItem");
        assert!(!spawner.accepts(&WaveParameters::default()));

        spawner.spawn();
        spawner.spawn();
        let orders = spawner.tick(Duration::ZERO, &mut rng);
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].payload, SpawnPayload::Prefab("ReleaseItem".into()));
        assert!(spawner.tick(SECOND, &mut rng).is_empty());
    }
}
