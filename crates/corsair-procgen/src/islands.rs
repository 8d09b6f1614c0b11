//! Island placement.
//!
//! Rejection sampling: draw a radius and a center, reject candidates that
//! crowd the spawn-clear circle or another island, and give up after a fixed
//! attempt budget. A short map is acceptable, not an error.

use rand::Rng;
use tracing::debug;

use corsair_core::components::Island;
use corsair_core::constants::*;
use corsair_core::math::rand_range;
use corsair_core::types::Position;

/// Generate the session's islands with the default tuning.
pub fn generate_islands<R: Rng + ?Sized>(rng: &mut R) -> Vec<Island> {
    place_islands(rng, TARGET_ISLAND_COUNT, ISLAND_PLACEMENT_ATTEMPTS)
}

/// Place up to `target` islands using at most `max_attempts` candidate draws.
pub fn place_islands<R: Rng + ?Sized>(rng: &mut R, target: usize, max_attempts: u32) -> Vec<Island> {
    let center = Position::new(MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0);
    let mut islands: Vec<Island> = Vec::with_capacity(target);
    let mut attempts = 0;

    while islands.len() < target && attempts < max_attempts {
        attempts += 1;

        let radius = rand_range(rng, ISLAND_MIN_RADIUS, ISLAND_MAX_RADIUS).round();
        let position = Position::new(
            rand_range(rng, radius, MAP_WIDTH - radius).round(),
            rand_range(rng, radius, MAP_HEIGHT - radius).round(),
        );
        let candidate = Island { position, radius };

        if is_clear_of_spawn(&candidate, &center) && is_clear_of_others(&candidate, &islands) {
            islands.push(candidate);
        }
    }

    if islands.len() < target {
        debug!(placed = islands.len(), target, attempts, "island budget exhausted");
    }

    islands
}

/// The candidate must not intrude on the spawn-clear circle.
fn is_clear_of_spawn(candidate: &Island, center: &Position) -> bool {
    candidate.position.distance_to(center) >= SPAWN_CLEAR_RADIUS + candidate.radius
}

/// The candidate must keep `ISLAND_PADDING` of open water to every placed island.
fn is_clear_of_others(candidate: &Island, placed: &[Island]) -> bool {
    placed.iter().all(|other| {
        candidate.position.distance_to(&other.position) >= other.radius + candidate.radius + ISLAND_PADDING
    })
}
