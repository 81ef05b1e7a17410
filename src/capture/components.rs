//! Boss and capture device components.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::flight::BossFlight;
use super::sequence::CaptureSequence;

/// Default reach of a capture device.
pub const CAPTURE_RADIUS: f32 = 3.0;
/// Seconds a captured boss lingers before it is removed.
pub const CAPTURE_GRACE_SECONDS: f32 = 1.0;

/// Marker for the boss (the dragon).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Boss;

/// A thrown device that vacuums up a boss flying within its radius.
#[derive(Component, Debug, Clone)]
pub struct CaptureDevice {
    pub radius: f32,
    engaged: Option<Entity>,
}

impl Default for CaptureDevice {
    fn default() -> Self {
        Self::new(CAPTURE_RADIUS)
    }
}

impl CaptureDevice {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            engaged: None,
        }
    }

    /// Boss currently being captured by this device.
    pub fn engaged(&self) -> Option<Entity> {
        self.engaged
    }

    pub(crate) fn engage(&mut self, boss: Entity) {
        self.engaged = Some(boss);
    }

    pub(crate) fn release(&mut self) {
        self.engaged = None;
    }

    pub fn in_range(&self, device: Vec3, boss: Vec3) -> bool {
        device.distance(boss) <= self.radius
    }
}

/// Removal countdown for a captured boss.
#[derive(Component, Debug)]
pub struct CaptureGrace(pub Timer);

impl Default for CaptureGrace {
    fn default() -> Self {
        Self(Timer::from_seconds(CAPTURE_GRACE_SECONDS, TimerMode::Once))
    }
}

/// Spawn a boss at `position`, ready to fly its circuit.
pub fn spawn_boss(commands: &mut Commands, position: Vec3, rotation: Quat) -> Entity {
    commands
        .spawn((
            Name::new("Boss"),
            Boss,
            BossFlight::default(),
            CaptureSequence::default(),
            Transform::from_translation(position).with_rotation(rotation),
            RigidBody::KinematicVelocityBased,
            Velocity::zero(),
            Collider::ball(1.0),
        ))
        .id()
}
