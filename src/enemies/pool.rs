//! Ghost object pool.
//!
//! Ghosts are allocated once and then recycled: releasing a ghost parks it
//! (`Dormant`, collider off, velocity zero) and queues its slot, acquiring
//! reuses the oldest parked slot first and only spawns a new ghost when the
//! queue is empty. The pool never shrinks. Under `PoolPolicy::Destroy` the
//! slot of a despawned ghost is handed to the next newly spawned one.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use std::collections::{HashMap, VecDeque};

use super::brain::GhostBrain;
use super::components::{Dormant, Ghost, GhostStats};
use crate::combat::Health;
use crate::waves::WaveParameters;

/// Ghosts created up front when the game boots.
pub const INITIAL_POOL_SIZE: usize = 20;

/// What happens to a ghost when it is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolPolicy {
    /// Park the ghost for reuse
    #[default]
    Recycle,
    /// Despawn the ghost (non-pooled fallback)
    Destroy,
}

/// Slot index of a pooled ghost.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolSlot(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    InUse,
    Free,
    Retired,
}

#[derive(Resource, Debug)]
pub struct GhostPool {
    slots: Vec<(Entity, SlotState)>,
    by_entity: HashMap<Entity, usize>,
    free: VecDeque<usize>,
    retired: Vec<usize>,
    in_use: usize,
    policy: PoolPolicy,
    initial_size: usize,
}

impl Default for GhostPool {
    fn default() -> Self {
        Self::new(INITIAL_POOL_SIZE, PoolPolicy::Recycle)
    }
}

impl GhostPool {
    pub fn new(initial_size: usize, policy: PoolPolicy) -> Self {
        Self {
            slots: Vec::with_capacity(initial_size),
            by_entity: HashMap::new(),
            free: VecDeque::with_capacity(initial_size),
            retired: Vec::new(),
            in_use: 0,
            policy,
            initial_size,
        }
    }

    pub fn policy(&self) -> PoolPolicy {
        self.policy
    }

    pub fn initial_size(&self) -> usize {
        self.initial_size
    }

    /// Parked ghosts ready for reuse.
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Ghosts currently out in the world.
    pub fn in_use(&self) -> usize {
        self.in_use
    }

    /// Slots allocated so far, retired ones included.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_available(&self, entity: Entity) -> bool {
        self.by_entity
            .get(&entity)
            .is_some_and(|&slot| self.slots[slot].1 == SlotState::Free)
    }

    /// Take the oldest parked ghost.
    fn checkout(&mut self) -> Option<(Entity, usize)> {
        let slot = self.free.pop_front()?;
        let entry = &mut self.slots[slot];
        entry.1 = SlotState::InUse;
        self.in_use += 1;
        Some((entry.0, slot))
    }

    fn register(&mut self, entity: Entity, state: SlotState) -> usize {
        let slot = match self.retired.pop() {
            Some(slot) => {
                self.slots[slot] = (entity, state);
                slot
            }
            None => {
                self.slots.push((entity, state));
                self.slots.len() - 1
            }
        };
        self.by_entity.insert(entity, slot);
        match state {
            SlotState::Free => self.free.push_back(slot),
            SlotState::InUse => self.in_use += 1,
            SlotState::Retired => {}
        }
        slot
    }

    /// Mark a slot as returned. False if the slot is unknown, belongs to a
    /// different entity, or is not in use.
    fn checkin(&mut self, entity: Entity, slot: usize, retire: bool) -> bool {
        let Some(entry) = self.slots.get_mut(slot) else {
            return false;
        };
        if entry.0 != entity || entry.1 != SlotState::InUse {
            return false;
        }

        self.in_use -= 1;
        if retire {
            entry.1 = SlotState::Retired;
            self.by_entity.remove(&entity);
            self.retired.push(slot);
        } else {
            entry.1 = SlotState::Free;
            self.free.push_back(slot);
        }
        true
    }
}

fn ghost_body() -> impl Bundle {
    (
        Name::new("Ghost"),
        Ghost,
        RigidBody::Dynamic,
        Collider::ball(0.35),
        GravityScale(0.0),
        LockedAxes::ROTATION_LOCKED,
    )
}

fn ghost_state(position: Vec3, rotation: Quat, params: &WaveParameters) -> impl Bundle {
    (
        Transform::from_translation(position).with_rotation(rotation),
        Health::new(params.health),
        GhostStats::from(params),
        GhostBrain::default(),
        Velocity::zero(),
    )
}

/// Spawn a parked ghost and queue it in the pool.
pub fn spawn_dormant_ghost(commands: &mut Commands, pool: &mut GhostPool) -> Entity {
    let params = WaveParameters::default();
    let entity = commands
        .spawn((
            ghost_body(),
            ghost_state(Vec3::ZERO, Quat::IDENTITY, &params),
            Dormant,
            ColliderDisabled,
        ))
        .id();
    let slot = pool.register(entity, SlotState::Free);
    commands.entity(entity).insert(PoolSlot(slot));
    entity
}

/// Take a ghost from the pool (or allocate one) and place it in the world.
///
/// Health, stats, velocity, collision and the state machine are always reset
/// from `params`, whether the ghost is new or recycled.
pub fn acquire_ghost(
    commands: &mut Commands,
    pool: &mut GhostPool,
    position: Vec3,
    rotation: Quat,
    params: &WaveParameters,
) -> Entity {
    if let Some((entity, _slot)) = pool.checkout() {
        commands
            .entity(entity)
            .insert(ghost_state(position, rotation, params))
            .remove::<(Dormant, ColliderDisabled)>();
        return entity;
    }

    let entity = commands
        .spawn((ghost_body(), ghost_state(position, rotation, params)))
        .id();
    let slot = pool.register(entity, SlotState::InUse);
    commands.entity(entity).insert(PoolSlot(slot));
    debug!("Ghost pool grew to {}", pool.capacity());
    entity
}

/// Return a ghost to the pool. Releasing a ghost that is not out in the
/// world is a no-op and returns false.
pub fn release_ghost(
    commands: &mut Commands,
    pool: &mut GhostPool,
    entity: Entity,
    slot: PoolSlot,
) -> bool {
    match pool.policy() {
        PoolPolicy::Recycle => {
            if !pool.checkin(entity, slot.0, false) {
                return false;
            }
            commands
                .entity(entity)
                .insert((Dormant, ColliderDisabled, Velocity::zero()));
        }
        PoolPolicy::Destroy => {
            if !pool.checkin(entity, slot.0, true) {
                return false;
            }
            commands.entity(entity).despawn_recursive();
        }
    }
    true
}

/// Pre-spawn the initial set of parked ghosts.
pub fn warm_up_pool(mut commands: Commands, mut pool: ResMut<GhostPool>) {
    let target = pool.initial_size();
    while pool.capacity() < target {
        spawn_dormant_ghost(&mut commands, &mut pool);
    }
    info!("Ghost pool warmed up with {} ghosts", pool.capacity());
}
