//! Capture plugin.

use bevy::prelude::*;

use super::flight::BossWaypoints;
use super::systems::*;
use crate::core::GameState;

/// Capture plugin - boss flight and the vacuum capture encounter.
pub struct CapturePlugin;

impl Plugin for CapturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BossWaypoints>().add_systems(
            FixedUpdate,
            (
                release_capture_devices,
                despawn_captured,
                engage_capture_devices,
                advance_captures,
                fly_bosses,
            )
                .chain()
                .run_if(not(in_state(GameState::GameOver))),
        );
    }
}
