//! Pirate ship behavior finite state machine.
//!
//! Pure functions that move one ship for one frame and decide whether it
//! fires. The caller gathers the player position and the live cannonballs;
//! the machine owns no world state and has no ECS dependency.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec2;
use rand::Rng;

use corsair_core::components::{PirateShip, ShipAi};
use corsair_core::constants::*;
use corsair_core::enums::{AiState, ShotOwner};
use corsair_core::math::{angle_between, clamp, normalize_angle, rand_range};
use corsair_core::types::{Position, ShipId, Velocity};

use crate::profiles::{profile_for_level, PirateProfile};

/// A cannonball as seen by the AI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomingShot {
    pub position: Position,
    pub z: f64,
    pub velocity: Velocity,
    pub owner: ShotOwner,
}

/// Input to the state machine for a single ship.
pub struct AiContext<'a> {
    pub player: Position,
    pub shots: &'a [IncomingShot],
    pub dt: f64,
}

/// A broadside the caller should spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireOrder {
    pub target: Position,
    pub speed: f64,
    pub damage: f64,
}

/// Output from the state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AiOutcome {
    pub fire: Option<FireOrder>,
    /// The ship dodged a cannonball and skipped its behavior this frame.
    pub evaded: bool,
    pub state_changed: bool,
}

/// Run one frame of AI for one ship.
pub fn update<R: Rng + ?Sized>(
    position: &mut Position,
    ship: &mut PirateShip,
    ai: &mut ShipAi,
    ctx: &AiContext,
    rng: &mut R,
) -> AiOutcome {
    tick_timers(ai, ctx.dt);

    let mut outcome = AiOutcome::default();

    // Evasion pre-empts everything, including separation.
    if let Some(shot) = incoming_threat(position, ship.id, ctx.shots) {
        evade(position, ship, ai, shot, ctx.dt);
        outcome.evaded = true;
        return outcome;
    }

    let profile = profile_for_level(ship.level);
    let dist = position.distance_to(&ctx.player);

    let previous = ai.state;
    ai.state = select_state(ship, ai, dist, rng);
    outcome.state_changed = ai.state != previous;

    match ai.state {
        AiState::Patrol => patrol(position, ship, ctx.dt, rng),
        AiState::Chase => chase(position, ship, ai, ctx, &profile),
        AiState::Attack => outcome.fire = attack(position, ship, ai, ctx, &profile, dist),
    }

    separate(position, ship, ctx.player);
    clamp_to_map(position);
    outcome
}

fn tick_timers(ai: &mut ShipAi, dt: f64) {
    ai.cannon_cooldown = (ai.cannon_cooldown - dt).max(0.0);
    ai.state_timer -= dt;
    ai.aggression_timer = (ai.aggression_timer - dt).max(0.0);
}

/// Pick this frame's state. Provoked ships within aggro range engage;
/// everything else patrols, with the patrol timer resampled on entry and
/// on expiry (expiry also swings the course).
pub fn select_state<R: Rng + ?Sized>(ship: &mut PirateShip, ai: &mut ShipAi, dist: f64, rng: &mut R) -> AiState {
    if ai.aggression_timer > 0.0 && dist <= ai.aggro_range {
        return if dist <= ai.attack_range {
            AiState::Attack
        } else {
            AiState::Chase
        };
    }

    if ai.state != AiState::Patrol {
        ai.state_timer = rand_range(rng, PATROL_DURATION_MIN, PATROL_DURATION_MAX);
    } else if ai.state_timer <= 0.0 {
        ai.state_timer = rand_range(rng, PATROL_DURATION_MIN, PATROL_DURATION_MAX);
        let swing = rand_range(rng, -PATROL_COURSE_CHANGE, PATROL_COURSE_CHANGE);
        ship.heading = normalize_angle(ship.heading + swing);
    }
    AiState::Patrol
}

/// First airborne cannonball within evasion range that this ship did not fire.
fn incoming_threat<'a>(position: &Position, id: ShipId, shots: &'a [IncomingShot]) -> Option<&'a IncomingShot> {
    shots.iter().find(|shot| {
        shot.owner != ShotOwner::Pirate(id) && shot.z > 0.0 && shot.position.distance_to(position) < EVASION_RANGE
    })
}

fn evade(position: &mut Position, ship: &PirateShip, ai: &mut ShipAi, shot: &IncomingShot, dt: f64) {
    let dodge = DVec2::from_angle(shot.velocity.heading() + FRAC_PI_2);
    let moved = position.as_dvec2() + dodge * ship.speed * dt * EVASION_SPEED_MULT;
    *position = moved.into();
    ai.cannon_cooldown = ai.cannon_cooldown.max(EVASION_MIN_COOLDOWN);
    clamp_to_map(position);
}

fn advance(position: &mut Position, heading: f64, distance: f64) {
    *position = position.offset(heading, distance);
}

fn patrol<R: Rng + ?Sized>(position: &mut Position, ship: &mut PirateShip, dt: f64, rng: &mut R) {
    ship.heading = normalize_angle(ship.heading + rand_range(rng, -PATROL_DRIFT, PATROL_DRIFT) * dt);
    advance(position, ship.heading, ship.speed * dt * PATROL_SPEED_MULT);
}

/// Head for a point beside the player rather than at them.
fn chase(position: &mut Position, ship: &mut PirateShip, ai: &ShipAi, ctx: &AiContext, profile: &PirateProfile) {
    let bearing = position.angle_to(&ctx.player);
    let flank_point = flank_point(ctx.player, bearing, ai.flank_side, profile.engagement_distance);
    ship.heading = position.angle_to(&flank_point);
    advance(position, ship.heading, ship.speed * ctx.dt * CHASE_SPEED_MULT);
}

/// The point 90 degrees off the ship-to-player bearing, on the given side.
pub fn flank_point(player: Position, bearing: f64, flank_side: f64, distance: f64) -> Position {
    player.offset(bearing + FRAC_PI_2 * flank_side, distance)
}

fn attack(
    position: &mut Position,
    ship: &mut PirateShip,
    ai: &mut ShipAi,
    ctx: &AiContext,
    profile: &PirateProfile,
    dist: f64,
) -> Option<FireOrder> {
    let bearing = position.angle_to(&ctx.player);

    if dist < profile.engagement_distance - BACKOFF_MARGIN {
        advance(position, bearing, -ship.speed * ctx.dt * BACKOFF_SPEED_MULT);
    }

    ai.circle_phase = (ai.circle_phase + profile.circle_rate * ctx.dt).rem_euclid(TAU);
    let circle_point = ctx.player.offset(ai.circle_phase, profile.engagement_distance);
    ship.heading = position.angle_to(&circle_point);
    advance(position, ship.heading, ship.speed * ctx.dt * ATTACK_SPEED_MULT);

    if ai.cannon_cooldown > 0.0 || !in_broadside_arc(ship.heading, bearing) {
        return None;
    }
    ai.cannon_cooldown = profile.reload_time;
    Some(FireOrder {
        target: ctx.player,
        speed: profile.shot_speed,
        damage: profile.shot_damage,
    })
}

/// Broadside guns bear when the target is neither ahead nor astern.
pub fn in_broadside_arc(heading: f64, bearing: f64) -> bool {
    let off_bow = angle_between(heading, bearing);
    off_bow > BROADSIDE_ANGLE_MIN && off_bow < BROADSIDE_ANGLE_MAX
}

/// Push the ship out of the keep-away ring around the player.
pub fn separate(position: &mut Position, ship: &PirateShip, player: Position) {
    let offset = player.as_dvec2() - position.as_dvec2();
    let dist = offset.length();
    let keepaway = SEPARATION_DISTANCE + ship.size;
    if dist > 0.0 && dist < keepaway {
        let pushed = position.as_dvec2() - offset / dist * (keepaway - dist) * SEPARATION_STRENGTH;
        *position = pushed.into();
    }
}

fn clamp_to_map(position: &mut Position) {
    position.x = clamp(position.x, 0.0, MAP_WIDTH);
    position.y = clamp(position.y, 0.0, MAP_HEIGHT);
}
