//! Decorative sea creatures.

use rand::Rng;

use corsair_core::components::Creature;
use corsair_core::constants::*;
use corsair_core::enums::CreatureKind;
use corsair_core::math::rand_range;
use corsair_core::types::Position;

/// Scatter `CREATURE_COUNT` creatures uniformly inside the inset map.
pub fn generate_creatures<R: Rng + ?Sized>(rng: &mut R) -> Vec<Creature> {
    (0..CREATURE_COUNT)
        .map(|i| Creature {
            id: i as u32,
            position: Position::new(
                rand_range(rng, SPAWN_INSET, MAP_WIDTH - SPAWN_INSET),
                rand_range(rng, SPAWN_INSET, MAP_HEIGHT - SPAWN_INSET),
            ),
            kind: CreatureKind::ALL[rng.gen_range(0..CreatureKind::ALL.len())],
            size: rand_range(rng, CREATURE_MIN_SIZE, CREATURE_MAX_SIZE).round(),
        })
        .collect()
}
