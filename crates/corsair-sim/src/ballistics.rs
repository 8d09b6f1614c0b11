//! Lobbed-shot solver and cannonball integration.
//!
//! A shot's flight time comes from its horizontal distance and muzzle speed,
//! clamped to a sane window. The ball leaves the muzzle at a launch height
//! that grows with range, and its vertical launch velocity is back-solved so
//! it comes down on the target exactly when the flight time runs out.
//!
//! Velocities are per 60 Hz tick; a frame of `dt` seconds covers `dt * 60`
//! ticks. Integration uses the closed-form constant-gravity step, so the
//! touchdown point does not depend on how the flight is split into frames.

use hecs::{Entity, World};

use corsair_core::components::Cannonball;
use corsair_core::constants::*;
use corsair_core::enums::ShotOwner;
use corsair_core::math::clamp;
use corsair_core::types::{Position, Velocity};

/// Launch parameters for one shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LobSolution {
    /// Seconds until touchdown.
    pub flight_time: f64,
    pub launch_height: f64,
    /// Horizontal velocity (units per tick).
    pub velocity: Velocity,
    /// Vertical launch velocity (units per tick).
    pub vz: f64,
}

/// Solve a lob from `from` to `target` at the given horizontal speed.
/// Non-positive or non-finite speeds fall back to the default muzzle speed.
pub fn solve_lob(from: Position, target: Position, speed: f64) -> LobSolution {
    let speed = if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        DEFAULT_SHOT_SPEED
    };
    let horizontal_speed = speed.max(MIN_SHOT_SPEED);

    let dx = target.x - from.x;
    let dy = target.y - from.y;
    let dist = dx.hypot(dy);

    let flight_time = clamp(dist / horizontal_speed, MIN_FLIGHT_TIME, MAX_FLIGHT_TIME);
    let launch_height = LAUNCH_HEIGHT_BASE + (dist * LAUNCH_HEIGHT_FACTOR).min(LAUNCH_HEIGHT_CAP);

    let ticks = flight_time * TICKS_PER_SECOND;
    LobSolution {
        flight_time,
        launch_height,
        velocity: Velocity::new(dx / ticks, dy / ticks),
        vz: (0.5 * GRAVITY * ticks * ticks - launch_height) / ticks,
    }
}

/// Spawn a cannonball entity flying from `from` toward `target`.
pub fn spawn_cannonball(
    world: &mut World,
    owner: ShotOwner,
    from: Position,
    target: Position,
    speed: f64,
    damage: f64,
) -> Entity {
    let lob = solve_lob(from, target, speed);
    world.spawn((
        from,
        Cannonball {
            z: lob.launch_height,
            velocity: lob.velocity,
            vz: lob.vz,
            owner,
            damage,
            travel_time: 0.0,
        },
    ))
}

/// Damage dealt by a shooter of the given level.
pub fn shot_damage(level: u32) -> f64 {
    SHOT_DAMAGE_BASE + level as f64 * SHOT_DAMAGE_PER_LEVEL
}

/// Advance one cannonball by `dt` seconds.
pub fn integrate(position: &mut Position, ball: &mut Cannonball, dt: f64) {
    let h = dt * TICKS_PER_SECOND;
    position.x += ball.velocity.x * h;
    position.y += ball.velocity.y * h;
    ball.z += ball.vz * h - 0.5 * GRAVITY * h * h;
    ball.vz -= GRAVITY * h;
    ball.travel_time += dt;
}

/// A ball at or below the waterline has landed.
pub fn has_landed(ball: &Cannonball) -> bool {
    ball.z <= 0.0
}
