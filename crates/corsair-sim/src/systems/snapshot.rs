//! Snapshot system: queries the ECS world and builds a `WorldSnapshot`.
//!
//! This system is read-only.

use hecs::World;

use corsair_core::components::*;
use corsair_core::state::*;
use corsair_core::types::{Position, SimTime};

use crate::world_setup::SeaChart;

/// Build a complete snapshot for the renderer.
pub fn build_snapshot(
    world: &World,
    chart: &SeaChart,
    player: &PlayerShip,
    camera: Camera,
    time: SimTime,
) -> WorldSnapshot {
    WorldSnapshot {
        time,
        camera,
        islands: chart.islands.clone(),
        creatures: chart.creatures.clone(),
        ships: build_ships(world),
        cannonballs: build_cannonballs(world),
        loot: build_loot(world),
        treasures: build_treasures(world),
        effects: build_effects(world),
        player: PlayerView::from(player),
    }
}

fn build_ships(world: &World) -> Vec<ShipView> {
    let mut ships: Vec<ShipView> = world
        .query::<(&Position, &PirateShip, &Hull, &ShipAi)>()
        .iter()
        .map(|(_entity, (pos, ship, hull, ai))| ShipView {
            id: ship.id,
            name: ship.name.clone(),
            position: *pos,
            heading: ship.heading,
            level: ship.level,
            size: ship.size,
            state: ai.state,
            health: hull.percent(),
        })
        .collect();
    ships.sort_by_key(|s| s.id);
    ships
}

fn build_cannonballs(world: &World) -> Vec<CannonballView> {
    world
        .query::<(&Position, &Cannonball)>()
        .iter()
        .map(|(_entity, (pos, ball))| CannonballView {
            position: *pos,
            z: ball.z,
            owner: ball.owner,
        })
        .collect()
}

fn build_loot(world: &World) -> Vec<LootView> {
    world
        .query::<(&Position, &LootDrop)>()
        .iter()
        .map(|(_entity, (pos, loot))| LootView {
            position: *pos,
            kind: loot.kind,
            value: loot.value,
        })
        .collect()
}

fn build_treasures(world: &World) -> Vec<TreasureView> {
    world
        .query::<(&Position, &Treasure)>()
        .iter()
        .map(|(_entity, (pos, treasure))| TreasureView {
            position: *pos,
            gold: treasure.gold,
        })
        .collect()
}

fn build_effects(world: &World) -> Vec<EffectView> {
    world
        .query::<(&Position, &VisualEffect)>()
        .iter()
        .map(|(_entity, (pos, effect))| EffectView {
            position: *pos,
            kind: effect.kind,
            alpha: effect.alpha,
            radius: effect.radius,
        })
        .collect()
}
