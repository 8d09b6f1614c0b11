//! Click-to-move player sailing.
//!
//! The ship steers straight at its target at a level-scaled speed and stops
//! within the arrival radius. With no target it coasts to a halt.

use corsair_core::components::PlayerShip;
use corsair_core::constants::*;
use corsair_core::math::clamp;
use corsair_core::types::Velocity;

/// Sailing speed in units per second. Higher levels are not faster.
pub fn player_speed(level: u32) -> f64 {
    let multiplier = (PLAYER_SPEED_MULT_BASE - level as f64 * PLAYER_SPEED_MULT_PER_LEVEL).max(PLAYER_SPEED_MULT_FLOOR);
    PLAYER_BASE_SPEED * multiplier
}

/// Integrate the player's position for one frame.
pub fn run(player: &mut PlayerShip, dt: f64) {
    let ticks = dt * TICKS_PER_SECOND;

    match player.target {
        Some(target) => {
            let dist = player.position.distance_to(&target);
            if dist <= ARRIVAL_RADIUS {
                player.target = None;
                player.velocity = Velocity::default();
            } else {
                player.heading = player.position.angle_to(&target);
                let step = (player_speed(player.level) * dt).min(dist);
                let per_tick = player_speed(player.level) / TICKS_PER_SECOND;
                player.velocity = Velocity::new(player.heading.cos() * per_tick, player.heading.sin() * per_tick);
                player.position = player.position.offset(player.heading, step);
                if dist - step <= ARRIVAL_RADIUS {
                    player.target = None;
                    player.velocity = Velocity::default();
                }
            }
        }
        None => {
            player.velocity.scale(COAST_DAMPING);
            player.position.x += player.velocity.x * ticks;
            player.position.y += player.velocity.y * ticks;
        }
    }

    player.position.x = clamp(player.position.x, 0.0, MAP_WIDTH);
    player.position.y = clamp(player.position.y, 0.0, MAP_HEIGHT);
}
