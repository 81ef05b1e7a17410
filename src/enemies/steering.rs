//! Velocity and acceleration limited steering shared by roaming and chasing.

use bevy::prelude::*;

/// Acceleration that steers `velocity` toward `target`.
///
/// The desired velocity is the offset to the target capped at
/// `max_velocity`; the acceleration needed to reach it within one step is
/// capped at `max_acceleration`.
pub fn steering_acceleration(
    position: Vec3,
    velocity: Vec3,
    target: Vec3,
    max_velocity: f32,
    max_acceleration: f32,
    dt: f32,
) -> Vec3 {
    if dt <= 0.0 {
        return Vec3::ZERO;
    }

    let desired = (target - position).clamp_length_max(max_velocity.max(0.0));
    let required = (desired - velocity) / dt;
    required.clamp_length_max(max_acceleration.max(0.0))
}

/// Apply an acceleration for one step, the way an acceleration-mode force does.
pub fn integrate(velocity: Vec3, acceleration: Vec3, dt: f32) -> Vec3 {
    velocity + acceleration * dt
}
