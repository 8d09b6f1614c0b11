//! Loot and treasure collection by proximity.

use hecs::{Entity, World};

use corsair_core::components::{LootDrop, PlayerShip, Treasure};
use corsair_core::constants::*;
use corsair_core::enums::LootKind;
use corsair_core::events::GameEvent;
use corsair_core::types::Position;

/// Collect every loot drop and treasure within pickup radius of the player.
pub fn run(world: &mut World, player: &mut PlayerShip, events: &mut Vec<GameEvent>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let at = player.position;

    for (entity, (pos, loot)) in world.query_mut::<(&Position, &LootDrop)>() {
        if pos.distance_to(&at) > PICKUP_RADIUS {
            continue;
        }
        match loot.kind {
            LootKind::Gold => player.gold += loot.value,
            LootKind::Jewelry => player.jewelry += loot.value,
            LootKind::Ammunition => player.cannonballs += loot.value,
        }
        events.push(GameEvent::LootCollected {
            kind: loot.kind,
            value: loot.value,
        });
        despawn_buffer.push(entity);
    }

    for (entity, (pos, treasure)) in world.query_mut::<(&Position, &Treasure)>() {
        if pos.distance_to(&at) > PICKUP_RADIUS {
            continue;
        }
        player.gold += treasure.gold;
        player.xp += XP_PER_TREASURE;
        events.push(GameEvent::TreasureCollected { gold: treasure.gold });
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
