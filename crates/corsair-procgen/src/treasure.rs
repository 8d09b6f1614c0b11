//! Treasure scattering, biased toward island shores.

use std::f64::consts::TAU;

use rand::Rng;

use corsair_core::components::{Island, Treasure};
use corsair_core::constants::*;
use corsair_core::math::{clamp, rand_range};
use corsair_core::types::Position;

/// A treasure and where it lies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreasureSpawn {
    pub position: Position,
    pub treasure: Treasure,
}

/// Scatter `TREASURE_COUNT` treasures. Most sit on a ring just off an island's
/// shore; the rest (and all of them when there are no islands) are uniform.
pub fn generate_treasures<R: Rng + ?Sized>(rng: &mut R, islands: &[Island]) -> Vec<TreasureSpawn> {
    (0..TREASURE_COUNT)
        .map(|_| {
            let position = if !islands.is_empty() && rng.gen_bool(TREASURE_ISLAND_BIAS) {
                let index = rng.gen_range(0..islands.len());
                near_island(rng, &islands[index])
            } else {
                uniform_inset(rng)
            };
            TreasureSpawn {
                position,
                treasure: Treasure {
                    gold: rand_range(rng, TREASURE_MIN_GOLD, TREASURE_MAX_GOLD).round() as u32,
                },
            }
        })
        .collect()
}

fn near_island<R: Rng + ?Sized>(rng: &mut R, island: &Island) -> Position {
    let angle = rand_range(rng, 0.0, TAU);
    let distance = island.radius + rand_range(rng, TREASURE_RING_MIN, TREASURE_RING_MAX);
    let spot = island.position.offset(angle, distance);
    Position::new(
        clamp(spot.x, SPAWN_INSET, MAP_WIDTH - SPAWN_INSET),
        clamp(spot.y, SPAWN_INSET, MAP_HEIGHT - SPAWN_INSET),
    )
}

fn uniform_inset<R: Rng + ?Sized>(rng: &mut R) -> Position {
    Position::new(
        rand_range(rng, SPAWN_INSET, MAP_WIDTH - SPAWN_INSET),
        rand_range(rng, SPAWN_INSET, MAP_HEIGHT - SPAWN_INSET),
    )
}
