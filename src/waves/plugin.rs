//! Wave plugin - registers wave events and loads the wave table.

use bevy::prelude::*;

use super::controller::{WaveController, WaveEnded, WaveStarted};
use super::systems::load_gameplay_settings;

/// Wave plugin - owns the wave controller and its notifications.
///
/// The elapsed-time driver that calls into the controller lives in the
/// session module.
pub struct WavePlugin;

impl Plugin for WavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WaveController>()
            .add_event::<WaveStarted>()
            .add_event::<WaveEnded>()
            .add_systems(Startup, load_gameplay_settings);
    }
}
