//! Two-phase capture of the boss by a capture device.
//!
//! PullToward slides the boss horizontally over the device at its current
//! height. VacuumDown then drops it into the device while it shrinks on an
//! ease-in-out curve and spins. The sequence is a plain state object
//! advanced once per tick; triggering it while it runs does nothing.

use bevy::prelude::*;
use std::time::Duration;

use crate::core::{progress, shrink};

/// Seconds spent sliding over the device.
pub const PULL_SECONDS: f32 = 1.0;
/// Seconds spent dropping into the device.
pub const VACUUM_SECONDS: f32 = 1.5;
/// Spin rate while being vacuumed.
pub const SPIN_DEGREES_PER_SECOND: f32 = 1080.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePhase {
    #[default]
    Idle,
    PullToward,
    VacuumDown,
    Done,
}

#[derive(Component, Debug, Clone, Default)]
pub struct CaptureSequence {
    phase: CapturePhase,
    elapsed: Duration,
    /// Device pulling the boss in. Only a weak reference: the device may
    /// disappear mid-sequence, in which case the last known point is kept.
    device: Option<Entity>,
    target: Vec3,
    start: Vec3,
    original_scale: Option<Vec3>,
}

impl CaptureSequence {
    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    pub fn device(&self) -> Option<Entity> {
        self.device
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Running or finished.
    pub fn is_engaged(&self) -> bool {
        self.phase != CapturePhase::Idle
    }

    pub fn is_running(&self) -> bool {
        matches!(
            self.phase,
            CapturePhase::PullToward | CapturePhase::VacuumDown
        )
    }

    /// Start pulling toward `target`. Returns false (and changes nothing)
    /// if a capture is already running or has completed.
    pub fn trigger(&mut self, device: Entity, target: Vec3, transform: &Transform) -> bool {
        if self.is_engaged() {
            return false;
        }
        self.phase = CapturePhase::PullToward;
        self.elapsed = Duration::ZERO;
        self.device = Some(device);
        self.target = target;
        self.start = transform.translation;
        self.original_scale = Some(transform.scale);
        true
    }

    /// Follow a moving device.
    pub fn retarget(&mut self, target: Vec3) {
        if self.is_running() {
            self.target = target;
        }
    }

    /// Advance by `dt`. Returns true on the tick the capture completes.
    pub fn advance(&mut self, dt: Duration, transform: &mut Transform) -> bool {
        match self.phase {
            CapturePhase::Idle | CapturePhase::Done => false,
            CapturePhase::PullToward => {
                self.elapsed += dt;
                let t = progress(self.elapsed.as_secs_f32(), PULL_SECONDS);
                let over_device = Vec3::new(self.target.x, self.start.y, self.target.z);
                transform.translation = self.start.lerp(over_device, t);
                transform.scale = self.original_scale();

                if t >= 1.0 {
                    transform.translation = over_device;
                    self.phase = CapturePhase::VacuumDown;
                    self.elapsed = Duration::ZERO;
                    self.start = over_device;
                }
                false
            }
            CapturePhase::VacuumDown => {
                self.elapsed += dt;
                let t = progress(self.elapsed.as_secs_f32(), VACUUM_SECONDS);
                transform.translation = self.start.lerp(self.target, t);
                transform.scale = self.original_scale() * shrink(t);
                transform.rotate_y(SPIN_DEGREES_PER_SECOND.to_radians() * dt.as_secs_f32());

                if t >= 1.0 {
                    transform.scale = Vec3::ZERO;
                    transform.translation = self.target;
                    self.phase = CapturePhase::Done;
                    return true;
                }
                false
            }
        }
    }

    /// Abort and restore the original scale.
    pub fn reset(&mut self, transform: &mut Transform) {
        if let Some(scale) = self.original_scale.take() {
            transform.scale = scale;
        }
        *self = Self::default();
    }

    fn original_scale(&self) -> Vec3 {
        self.original_scale.unwrap_or(Vec3::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_micros(15625);

    fn device() -> Entity {
        Entity::from_raw(7)
    }

    fn boss_at(position: Vec3) -> Transform {
        Transform::from_translation(position).with_scale(Vec3::splat(2.0))
    }

    fn run(sequence: &mut CaptureSequence, transform: &mut Transform, ticks: usize) -> Vec<Transform> {
        (0..ticks)
            .map(|_| {
                sequence.advance(STEP, transform);
                *transform
            })
            .collect()
    }

    #[test]
    fn pull_keeps_height_and_scale() {
        let mut transform = boss_at(Vec3::new(4.0, 3.0, 0.0));
        let mut sequence = CaptureSequence::default();
        assert!(sequence.trigger(device(), Vec3::ZERO, &transform));

        // Half of the pull phase
        run(&mut sequence, &mut transform, 32);
        assert_eq!(sequence.phase(), CapturePhase::PullToward);
        assert!((transform.translation - Vec3::new(2.0, 3.0, 0.0)).length() < 1e-4);
        assert_eq!(transform.scale, Vec3::splat(2.0));

        run(&mut sequence, &mut transform, 32);
        assert_eq!(sequence.phase(), CapturePhase::VacuumDown);
        assert!((transform.translation - Vec3::new(0.0, 3.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn vacuum_shrinks_and_completes_at_target() {
        let mut transform = boss_at(Vec3::new(0.0, 3.0, 4.0));
        let mut sequence = CaptureSequence::default();
        let target = Vec3::new(0.0, 0.5, 0.0);
        sequence.trigger(device(), target, &transform);

        run(&mut sequence, &mut transform, 64);
        let mut previous_scale = transform.scale.x;
        let mut completions = 0;
        for _ in 0..96 {
            if sequence.advance(STEP, &mut transform) {
                completions += 1;
            }
            assert!(transform.scale.x <= previous_scale + 1e-6);
            previous_scale = transform.scale.x;
        }

        assert_eq!(completions, 1);
        assert_eq!(sequence.phase(), CapturePhase::Done);
        assert_eq!(transform.scale, Vec3::ZERO);
        assert_eq!(transform.translation, target);
    }

    #[test]
    fn second_trigger_is_a_no_op() {
        let start = boss_at(Vec3::new(-3.0, 3.0, 2.0));
        let target = Vec3::new(1.0, 0.0, 1.0);

        let mut once_transform = start;
        let mut once = CaptureSequence::default();
        once.trigger(device(), target, &once_transform);
        let single = run(&mut once, &mut once_transform, 200);

        let mut twice_transform = start;
        let mut twice = CaptureSequence::default();
        assert!(twice.trigger(device(), target, &twice_transform));
        assert!(!twice.trigger(Entity::from_raw(8), Vec3::ONE, &twice_transform));
        let double = run(&mut twice, &mut twice_transform, 200);

        assert_eq!(single, double);
        assert_eq!(twice.device(), Some(device()));
    }

    #[test]
    fn completed_sequence_cannot_restart() {
        let mut transform = boss_at(Vec3::new(1.0, 3.0, 0.0));
        let mut sequence = CaptureSequence::default();
        sequence.trigger(device(), Vec3::ZERO, &transform);
        run(&mut sequence, &mut transform, 200);

        assert!(!sequence.trigger(device(), Vec3::ZERO, &transform));
        assert!(!sequence.advance(STEP, &mut transform));
    }

    #[test]
    fn reset_restores_scale() {
        let mut transform = boss_at(Vec3::new(0.0, 3.0, 3.0));
        let mut sequence = CaptureSequence::default();
        sequence.trigger(device(), Vec3::ZERO, &transform);
        run(&mut sequence, &mut transform, 100);
        assert!(transform.scale.x < 2.0);

        sequence.reset(&mut transform);
        assert_eq!(transform.scale, Vec3::splat(2.0));
        assert_eq!(sequence.phase(), CapturePhase::Idle);
        assert!(sequence.trigger(device(), Vec3::ZERO, &transform));
    }
}
