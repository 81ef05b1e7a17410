//! Shared random number source.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Randomness for roam targets and spawn offsets.
///
/// Kept as a resource so tests (and replays) can seed it.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}
