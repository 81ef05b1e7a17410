//! Animation requests published for the host animator.

use bevy::prelude::*;

/// Ghost animation clips the state machine asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GhostClip {
    Idle,
    Move,
    Attack,
    Dissolve,
}

/// Sent whenever a ghost should play a clip.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct GhostAnimationCue {
    pub entity: Entity,
    pub clip: GhostClip,
}
