//! Boss waypoint flight.
//!
//! The boss loops over a fixed circuit at a constant height, easing its
//! velocity toward the next waypoint and braking once it is over it. The
//! next waypoint is selected when the boss has nearly stopped.

use bevy::prelude::*;

/// Cruise speed.
pub const FLIGHT_SPEED: f32 = 5.0;
/// Cruise altitude; waypoint heights are ignored.
pub const FLIGHT_HEIGHT: f32 = 3.0;
/// Horizontal distance at which a waypoint counts as reached.
pub const WAYPOINT_REACH: f32 = 1.0;
/// Velocity easing rate.
pub const MOVEMENT_SMOOTHNESS: f32 = 5.0;
/// Slerp rate when turning toward the flight direction.
pub const TURN_RATE: f32 = 2.0;
/// Speed under which a braking boss moves on to the next waypoint.
const SETTLE_SPEED: f32 = 1.0;

/// Circuit shared by every boss.
#[derive(Resource, Debug, Clone)]
pub struct BossWaypoints(pub Vec<Vec3>);

impl Default for BossWaypoints {
    fn default() -> Self {
        Self(vec![
            Vec3::new(8.0, 0.0, 8.0),
            Vec3::new(-8.0, 0.0, 8.0),
            Vec3::new(-8.0, 0.0, -8.0),
            Vec3::new(8.0, 0.0, -8.0),
        ])
    }
}

#[derive(Component, Debug, Clone, Default)]
pub struct BossFlight {
    waypoint: usize,
}

impl BossFlight {
    pub fn waypoint(&self) -> usize {
        self.waypoint
    }

    /// Advance the flight by `dt` seconds, updating `velocity` and turning
    /// `transform` toward the direction of travel.
    pub fn step(&mut self, waypoints: &[Vec3], transform: &mut Transform, velocity: &mut Vec3, dt: f32) {
        if waypoints.is_empty() {
            return;
        }
        self.waypoint %= waypoints.len();

        let waypoint = waypoints[self.waypoint];
        let target = Vec3::new(waypoint.x, FLIGHT_HEIGHT, waypoint.z);
        let position = transform.translation;
        let horizontal = Vec2::new(position.x, position.z).distance(Vec2::new(target.x, target.z));
        let blend = (MOVEMENT_SMOOTHNESS * dt).min(1.0);

        if horizontal > WAYPOINT_REACH {
            let direction = (target - position).normalize_or_zero();
            *velocity = velocity.lerp(direction * FLIGHT_SPEED, blend);

            if direction != Vec3::ZERO {
                let facing = Transform::IDENTITY.looking_to(direction, Vec3::Y).rotation;
                transform.rotation = transform
                    .rotation
                    .slerp(facing, (TURN_RATE * dt).min(1.0));
            }
        } else {
            *velocity = velocity.lerp(Vec3::ZERO, blend);
            if velocity.length() < SETTLE_SPEED {
                self.waypoint = (self.waypoint + 1) % waypoints.len();
            }
        }
    }
}
