//! Combat systems - damage and healing resolution.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::capture::Boss;
use crate::enemies::{Dormant, Ghost};
use crate::player::Player;

/// System set ordering for combat.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatSet {
    /// Damage and healing are applied
    Resolve,
}

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app.add_systems(
        Update,
        (apply_damage, apply_healing).chain().in_set(CombatSet::Resolve),
    );
}

fn casualty_of(ghost: bool, boss: bool, player: bool) -> Casualty {
    if ghost {
        Casualty::Ghost
    } else if boss {
        Casualty::Boss
    } else if player {
        Casualty::Player
    } else {
        Casualty::Other
    }
}

/// Apply damage to entities.
///
/// On death the collider stops responding (except for the player, whose rig
/// belongs to the host) and a single `DeathEvent` is broadcast. The enemy
/// state machine picks the death up on its next fixed tick.
pub fn apply_damage(
    mut commands: Commands,
    mut damage_events: EventReader<DamageEvent>,
    mut health_query: Query<
        (&mut Health, Has<Ghost>, Has<Boss>, Has<Player>),
        Without<Dormant>,
    >,
    mut changed_events: EventWriter<HealthChanged>,
    mut death_events: EventWriter<DeathEvent>,
) {
    for event in damage_events.read() {
        let Ok((mut health, is_ghost, is_boss, is_player)) = health_query.get_mut(event.target)
        else {
            continue;
        };

        let outcome = health.take_damage(event.amount);
        debug!(
            "{:?} took {} damage, {} left",
            event.target, event.amount, outcome.remaining
        );

        changed_events.send(HealthChanged {
            entity: event.target,
            remaining: outcome.remaining,
            died: outcome.died,
        });

        if outcome.died {
            if !is_player {
                commands.entity(event.target).insert(ColliderDisabled);
            }
            death_events.send(DeathEvent {
                entity: event.target,
                killed_by: event.source,
                casualty: casualty_of(is_ghost, is_boss, is_player),
            });
        }
    }
}

/// Apply healing to entities. Dead entities are not revived.
pub fn apply_healing(
    mut heal_events: EventReader<HealEvent>,
    mut health_query: Query<&mut Health, Without<Dormant>>,
    mut changed_events: EventWriter<HealthChanged>,
) {
    for event in heal_events.read() {
        let Ok(mut health) = health_query.get_mut(event.target) else {
            continue;
        };
        if health.is_dead() {
            continue;
        }

        let remaining = health.heal(event.amount);
        changed_events.send(HealthChanged {
            entity: event.target,
            remaining,
            died: false,
        });
    }
}
