//! Global events used for cross-system communication.
//!
//! Damage flows through events so the enemy AI, the capture device and any
//! host weapon can hurt things without knowing who listens. The death
//! notification is a plain broadcast: every reader sees every death, in
//! registration order, with no queuing beyond Bevy's double buffer.

use bevy::prelude::*;

/// What kind of entity a death notification refers to.
///
/// Scoring and win-condition logic branch on this instead of querying the
/// entity, which may already be gone by the time the event is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Casualty {
    Ghost,
    Boss,
    Player,
    Other,
}

/// Request to damage an entity.
///
/// The damage system applies these to `Health` and answers with a
/// `HealthChanged` event, the equivalent of a damage callback.
#[derive(Event, Debug, Clone)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage, if known
    pub source: Option<Entity>,
    /// Damage amount
    pub amount: f32,
    /// World-space hit position
    pub position: Vec3,
    /// Surface normal at the hit
    pub normal: Vec3,
}

/// Request to heal an entity.
#[derive(Event, Debug, Clone)]
pub struct HealEvent {
    pub target: Entity,
    pub amount: f32,
}

/// Sent after damage or healing has been applied.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct HealthChanged {
    pub entity: Entity,
    /// Health left after the change
    pub remaining: f32,
    /// True only on the change that killed the entity
    pub died: bool,
}

/// Sent exactly once when an entity dies.
#[derive(Event, Debug, Clone)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that killed it (if any)
    pub killed_by: Option<Entity>,
    pub casualty: Casualty,
}
