//! Single-target hook for the freeze screen effect.

use bevy::prelude::*;

/// The ghost the freeze effect is currently focused on.
///
/// Only one ghost is focused at a time: the one that most recently started
/// chasing the player.
#[derive(Resource, Debug, Default)]
pub struct FreezeFocus {
    target: Option<Entity>,
}

impl FreezeFocus {
    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    pub fn set(&mut self, entity: Entity) {
        self.target = Some(entity);
    }

    /// Drop the focus if it points at `entity`.
    pub fn clear_if(&mut self, entity: Entity) {
        if self.target == Some(entity) {
            self.target = None;
        }
    }
}
