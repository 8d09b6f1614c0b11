//! Cannonball flight and impact resolution.
//!
//! Every ball is integrated; a ball that reaches the waterline resolves at
//! most one hit and is removed in the same frame. Pirate shots can only hit
//! the player and player shots can only hit pirates.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use corsair_core::components::{Cannonball, Hull, PirateShip, PlayerShip, ShipAi};
use corsair_core::constants::*;
use corsair_core::enums::{AiState, EffectKind, ShotOwner};
use corsair_core::events::GameEvent;
use corsair_core::math::rand_range;
use corsair_core::types::{Position, ShipId, Velocity};
use corsair_procgen::random_sea_position;

use crate::ballistics::{has_landed, integrate};
use crate::world_setup::{drop_loot, spawn_effect};

/// A ball that touched down this frame.
struct Splash {
    entity: Entity,
    position: Position,
    owner: ShotOwner,
    damage: f64,
}

/// Integrate all cannonballs and resolve the ones that land.
pub fn run(
    world: &mut World,
    player: &mut PlayerShip,
    dt: f64,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut splashes = Vec::new();
    for (entity, (pos, ball)) in world.query_mut::<(&mut Position, &mut Cannonball)>() {
        integrate(pos, ball, dt);
        if has_landed(ball) {
            splashes.push(Splash {
                entity,
                position: *pos,
                owner: ball.owner,
                damage: ball.damage,
            });
        }
    }

    despawn_buffer.clear();
    for splash in splashes {
        match splash.owner {
            ShotOwner::Pirate(shooter) => {
                if splash.position.distance_to(&player.position) <= HIT_RADIUS {
                    hit_player(world, player, shooter, splash.damage, events);
                }
            }
            ShotOwner::Player => {
                if let Some(target) = first_ship_within(world, splash.position, HIT_RADIUS) {
                    hit_ship(world, player, target, splash.damage, rng, events);
                }
            }
        }
        despawn_buffer.push(splash.entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// The lowest-id pirate ship within `radius` of `at`.
fn first_ship_within(world: &World, at: Position, radius: f64) -> Option<Entity> {
    world
        .query::<(&Position, &PirateShip)>()
        .iter()
        .filter(|(_entity, (pos, _ship))| pos.distance_to(&at) <= radius)
        .min_by_key(|(_entity, (_pos, ship))| ship.id)
        .map(|(entity, _)| entity)
}

fn hit_player(world: &mut World, player: &mut PlayerShip, shooter: ShipId, damage: f64, events: &mut Vec<GameEvent>) {
    player.hull.hp -= damage;
    spawn_effect(world, player.position, EffectKind::HitFlash);
    events.push(GameEvent::PlayerHit {
        by: shooter,
        damage,
        remaining_hp: player.hull.hp.max(0.0),
    });

    if player.hull.is_sunk() {
        info!(name = %player.name, by = shooter.0, "player sunk, returning to port");
        spawn_effect(world, player.position, EffectKind::Explosion);
        respawn_player(player);
        events.push(GameEvent::PlayerSunk);
    }
}

/// Put the player back at the map center with a full hull.
pub fn respawn_player(player: &mut PlayerShip) {
    player.position = Position::new(MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0);
    player.hull.hp = player.hull.max_hp;
    player.velocity = Velocity::default();
    player.target = None;
}

fn hit_ship(
    world: &mut World,
    player: &mut PlayerShip,
    target: Entity,
    damage: f64,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    let Ok((pos, ship, hull, ai)) = world.query_one_mut::<(&mut Position, &PirateShip, &mut Hull, &mut ShipAi)>(target)
    else {
        return;
    };

    hull.hp -= damage;
    ai.aggression_timer = AGGRESSION_DURATION;
    let wreck = *pos;
    let id = ship.id;
    let level = ship.level;
    events.push(GameEvent::ShipHit {
        ship_id: id,
        damage,
        remaining_hp: hull.hp.max(0.0),
    });

    if !hull.is_sunk() {
        spawn_effect(world, wreck, EffectKind::HitFlash);
        return;
    }

    let name = ship.name.clone();
    *pos = random_sea_position(rng);
    hull.hp = hull.max_hp;
    reset_ai(ai, rng);

    info!(ship = id.0, %name, level, "pirate ship sunk");
    events.push(GameEvent::ShipSunk {
        ship_id: id,
        name,
        level,
        at: wreck,
    });

    spawn_effect(world, wreck, EffectKind::HitFlash);
    spawn_effect(world, wreck, EffectKind::Explosion);
    drop_loot(world, rng, wreck, level);
    player.xp += XP_PER_SINK_BASE + level * XP_PER_SINK_PER_LEVEL;
}

/// Back to a fresh patrol: calm, reloaded, on a new patrol timer.
fn reset_ai(ai: &mut ShipAi, rng: &mut ChaCha8Rng) {
    ai.state = AiState::Patrol;
    ai.aggression_timer = 0.0;
    ai.cannon_cooldown = 0.0;
    ai.state_timer = rand_range(rng, PATROL_DURATION_MIN, PATROL_DURATION_MAX);
}
