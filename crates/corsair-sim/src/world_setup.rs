//! Entity spawn factories for setting up the simulation world.
//!
//! Islands and creatures never change after generation, so they live in a
//! plain `SeaChart`. Everything that moves, gets picked up or expires is an
//! ECS entity.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use corsair_core::components::*;
use corsair_core::constants::*;
use corsair_core::enums::{EffectKind, LootKind};
use corsair_core::math::rand_range;
use corsair_core::types::Position;
use corsair_procgen::{generate_creatures, generate_islands, generate_pirate_fleet, generate_treasures};
use corsair_procgen::{PirateSpawn, TreasureSpawn};

/// Static scenery generated once per session.
#[derive(Debug, Clone, Default)]
pub struct SeaChart {
    pub islands: Vec<Island>,
    pub creatures: Vec<Creature>,
}

/// Generate the map and populate the world: islands, creatures, treasures,
/// and the pirate fleet.
pub fn setup_world(world: &mut World, rng: &mut ChaCha8Rng) -> SeaChart {
    let islands = generate_islands(rng);
    let creatures = generate_creatures(rng);

    for spawn in generate_treasures(rng, &islands) {
        spawn_treasure(world, spawn);
    }
    for spawn in generate_pirate_fleet(rng) {
        spawn_pirate(world, spawn);
    }

    debug!(
        islands = islands.len(),
        creatures = creatures.len(),
        entities = world.len(),
        "world populated"
    );
    SeaChart { islands, creatures }
}

pub fn spawn_pirate(world: &mut World, spawn: PirateSpawn) -> Entity {
    world.spawn((spawn.position, spawn.ship, spawn.hull, spawn.ai))
}

pub fn spawn_treasure(world: &mut World, spawn: TreasureSpawn) -> Entity {
    world.spawn((spawn.position, spawn.treasure))
}

pub fn spawn_loot(world: &mut World, position: Position, kind: LootKind, value: u32) -> Entity {
    world.spawn((position, LootDrop { kind, value }))
}

/// Drop the spoils of a sunk ship: gold or jewelry, and sometimes a crate of
/// cannonballs nearby. Returns how many drops were spawned.
pub fn drop_loot(world: &mut World, rng: &mut ChaCha8Rng, at: Position, level: u32) -> usize {
    let kind = if rng.gen_bool(LOOT_GOLD_CHANCE) {
        LootKind::Gold
    } else {
        LootKind::Jewelry
    };
    let value = rand_range(rng, LOOT_VALUE_MIN, LOOT_VALUE_MAX) + level as f64 * LOOT_VALUE_PER_LEVEL;
    spawn_loot(world, at, kind, value.round() as u32);

    if !rng.gen_bool(AMMO_DROP_CHANCE) {
        return 1;
    }
    let spot = Position::new(
        at.x + rand_range(rng, -AMMO_DROP_SCATTER, AMMO_DROP_SCATTER),
        at.y + rand_range(rng, -AMMO_DROP_SCATTER, AMMO_DROP_SCATTER),
    );
    let rounds = rand_range(rng, AMMO_DROP_MIN, AMMO_DROP_MAX).round() as u32;
    spawn_loot(world, spot, LootKind::Ammunition, rounds);
    2
}

pub fn spawn_effect(world: &mut World, position: Position, kind: EffectKind) -> Entity {
    let effect = match kind {
        EffectKind::HitFlash => VisualEffect::new(kind, HIT_FLASH_LIFETIME, HIT_FLASH_RADIUS),
        EffectKind::Explosion => VisualEffect::new(kind, EXPLOSION_LIFETIME, EXPLOSION_RADIUS),
    };
    world.spawn((position, effect))
}
