//! Per-ghost finite state machine: roam, chase, dissolve.
//!
//! Every ghost owns its own state instance, so timers (roam re-roll, attack
//! cooldown, dissolve) never leak between ghosts. States do not touch the
//! world directly: each tick returns a list of `BrainEffect`s that the AI
//! system applies to transforms, velocities and events.
//!
//! Switching state always runs the old state's exit hook and then the new
//! state's enter hook.

use bevy::prelude::*;
use rand::Rng;
use std::ops::Range;
use std::time::Duration;

use super::animation::GhostClip;
use super::components::GhostStats;

/// Radius around the ghost in which roam targets are picked.
pub const ROAM_RADIUS: f32 = 3.0;
/// Seconds a roam target is kept before a new one is rolled.
pub const ROAM_SECONDS: Range<f32> = 2.0..4.0;
/// Distance at which a chasing ghost stops and attacks.
pub const STOP_CHASE_DISTANCE: f32 = 2.0;
/// Seconds between death and the return to the pool.
pub const DISSOLVE_SECONDS: f32 = 2.0;
/// Maximum up/down tilt while facing the player.
pub const MAX_TILT_DEGREES: f32 = 30.0;
/// Slerp rate used when turning toward the player.
pub const FACE_TURN_RATE: f32 = 3.0;

/// What a ghost can see on a given tick.
#[derive(Debug, Clone)]
pub struct BrainContext<'a> {
    pub position: Vec3,
    /// Player position, if a player exists this tick
    pub player: Option<Vec3>,
    pub dead: bool,
    pub stats: &'a GhostStats,
    /// Fixed step length
    pub dt: Duration,
}

/// Side effects requested by a state.
#[derive(Debug, Clone, PartialEq)]
pub enum BrainEffect {
    Animate(GhostClip),
    /// Steer toward a point with the limited steering controller
    SteerToward(Vec3),
    /// Stop horizontal movement
    Hover,
    /// Turn toward a point with a clamped tilt
    Face(Vec3),
    /// Become the freeze effect's focus
    FocusFreeze,
    /// Hit the player for this much damage
    Strike(f32),
    /// Go back to the pool
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GhostStateKind {
    Roam,
    Chase,
    Dissolve,
}

#[derive(Debug, Clone)]
pub struct RoamState {
    target: Vec3,
    timer: Timer,
}

impl RoamState {
    fn enter(ctx: &BrainContext, rng: &mut impl Rng, effects: &mut Vec<BrainEffect>) -> Self {
        let mut target = ctx.position + random_in_unit_sphere(rng) * ROAM_RADIUS;
        target.y = ctx.position.y;
        let seconds = rng.gen_range(ROAM_SECONDS);

        effects.push(BrainEffect::Animate(GhostClip::Idle));
        Self {
            target,
            timer: Timer::from_seconds(seconds, TimerMode::Once),
        }
    }

    fn update(&mut self, ctx: &BrainContext, effects: &mut Vec<BrainEffect>) -> Option<GhostStateKind> {
        if ctx.dead {
            return Some(GhostStateKind::Dissolve);
        }

        effects.push(BrainEffect::SteerToward(self.target));

        let mut next = None;
        self.timer.tick(ctx.dt);
        if self.timer.finished() {
            next = Some(GhostStateKind::Roam);
        }

        if let Some(player) = ctx.player {
            if ctx.position.distance(player) < ctx.stats.chase_distance {
                next = Some(GhostStateKind::Chase);
            }
        }
        next
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn remaining(&self) -> Duration {
        self.timer.remaining()
    }
}

#[derive(Debug, Clone)]
pub struct ChaseState {
    attack_timer: Timer,
    moving: bool,
}

impl ChaseState {
    fn enter(effects: &mut Vec<BrainEffect>) -> Self {
        effects.push(BrainEffect::Animate(GhostClip::Move));
        effects.push(BrainEffect::FocusFreeze);
        Self {
            // Zero length: the first attack lands as soon as the ghost is in range.
            attack_timer: Timer::new(Duration::ZERO, TimerMode::Once),
            moving: true,
        }
    }

    fn update(&mut self, ctx: &BrainContext, effects: &mut Vec<BrainEffect>) -> Option<GhostStateKind> {
        if ctx.dead {
            return Some(GhostStateKind::Dissolve);
        }
        let Some(player) = ctx.player else {
            return None;
        };

        effects.push(BrainEffect::Face(player));

        if ctx.position.distance(player) > STOP_CHASE_DISTANCE {
            effects.push(BrainEffect::SteerToward(player));
            if !self.moving {
                self.moving = true;
                effects.push(BrainEffect::Animate(GhostClip::Move));
            }
        } else {
            self.moving = false;
            effects.push(BrainEffect::Hover);

            self.attack_timer.tick(ctx.dt);
            if self.attack_timer.finished() {
                effects.push(BrainEffect::Animate(GhostClip::Attack));
                effects.push(BrainEffect::Strike(ctx.stats.attack_damage));
                self.attack_timer.set_duration(ctx.stats.attack_cooldown);
                self.attack_timer.reset();
            }
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct DissolveState {
    timer: Timer,
    released: bool,
}

impl DissolveState {
    fn enter(effects: &mut Vec<BrainEffect>) -> Self {
        effects.push(BrainEffect::Animate(GhostClip::Dissolve));
        Self {
            timer: Timer::from_seconds(DISSOLVE_SECONDS, TimerMode::Once),
            released: false,
        }
    }

    fn update(&mut self, ctx: &BrainContext, effects: &mut Vec<BrainEffect>) -> Option<GhostStateKind> {
        self.timer.tick(ctx.dt);
        if self.timer.finished() && !self.released {
            self.released = true;
            effects.push(BrainEffect::Release);
        }
        None
    }
}

#[derive(Debug, Clone)]
pub enum GhostState {
    Roam(RoamState),
    Chase(ChaseState),
    Dissolve(DissolveState),
}

impl GhostState {
    pub fn kind(&self) -> GhostStateKind {
        match self {
            GhostState::Roam(_) => GhostStateKind::Roam,
            GhostState::Chase(_) => GhostStateKind::Chase,
            GhostState::Dissolve(_) => GhostStateKind::Dissolve,
        }
    }

    fn enter(
        kind: GhostStateKind,
        ctx: &BrainContext,
        rng: &mut impl Rng,
        effects: &mut Vec<BrainEffect>,
    ) -> Self {
        match kind {
            GhostStateKind::Roam => GhostState::Roam(RoamState::enter(ctx, rng, effects)),
            GhostStateKind::Chase => GhostState::Chase(ChaseState::enter(effects)),
            GhostStateKind::Dissolve => GhostState::Dissolve(DissolveState::enter(effects)),
        }
    }

    fn update(&mut self, ctx: &BrainContext, effects: &mut Vec<BrainEffect>) -> Option<GhostStateKind> {
        match self {
            GhostState::Roam(state) => state.update(ctx, effects),
            GhostState::Chase(state) => state.update(ctx, effects),
            GhostState::Dissolve(state) => state.update(ctx, effects),
        }
    }

    fn exit(&mut self, _effects: &mut Vec<BrainEffect>) {
        // No state owns anything that needs undoing on exit yet.
    }
}

/// State machine component. Starts empty and enters Roam on its first tick.
#[derive(Component, Debug, Clone, Default)]
pub struct GhostBrain {
    state: Option<GhostState>,
}

impl GhostBrain {
    pub fn state(&self) -> Option<&GhostState> {
        self.state.as_ref()
    }

    pub fn kind(&self) -> Option<GhostStateKind> {
        self.state.as_ref().map(GhostState::kind)
    }

    /// Advance one fixed step and return the requested side effects.
    pub fn tick(&mut self, ctx: &BrainContext, rng: &mut impl Rng) -> Vec<BrainEffect> {
        let mut effects = Vec::new();

        let next = match self.state.as_mut() {
            None => Some(GhostStateKind::Roam),
            Some(state) => state.update(ctx, &mut effects),
        };

        if let Some(kind) = next {
            self.switch_state(kind, ctx, rng, &mut effects);
        }
        effects
    }

    /// Exit the current state (if any) and enter `kind`.
    pub fn switch_state(
        &mut self,
        kind: GhostStateKind,
        ctx: &BrainContext,
        rng: &mut impl Rng,
        effects: &mut Vec<BrainEffect>,
    ) {
        if let Some(current) = self.state.as_mut() {
            current.exit(effects);
        }
        self.state = Some(GhostState::enter(kind, ctx, rng, effects));
    }
}

/// Uniform random point inside the unit sphere.
pub fn random_in_unit_sphere(rng: &mut impl Rng) -> Vec3 {
    loop {
        let point = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if point.length_squared() <= 1.0 {
            return point;
        }
    }
}

/// Rotation that faces `to` from `from`, with the up/down tilt clamped to
/// `MAX_TILT_DEGREES` so the ghost keeps an upright silhouette.
pub fn facing_rotation(from: Vec3, to: Vec3) -> Option<Quat> {
    let direction = to - from;
    if direction.length_squared() <= f32::EPSILON {
        return None;
    }

    let horizontal = Vec2::new(direction.x, direction.z).length();
    let max_tilt = MAX_TILT_DEGREES.to_radians();
    let yaw = (-direction.x).atan2(-direction.z);
    let pitch = direction.y.atan2(horizontal).clamp(-max_tilt, max_tilt);

    Some(Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0))
}
