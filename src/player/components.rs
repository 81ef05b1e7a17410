//! Player-related components.

use bevy::prelude::*;

use crate::combat::Health;

/// Marker component for the player entity (the VR head / camera rig).
///
/// Enemies resolve the player through a query every tick instead of caching
/// it, so a missing player only skips behavior until one exists again.
#[derive(Component)]
pub struct Player;

/// Spawn the player at `position` with a full health pool.
pub fn spawn_player(commands: &mut Commands, position: Vec3, max_health: f32) -> Entity {
    commands
        .spawn((
            Name::new("Player"),
            Player,
            Health::new(max_health),
            Transform::from_translation(position),
        ))
        .id()
}
