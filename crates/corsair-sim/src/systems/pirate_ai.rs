//! Pirate AI system: runs the state machine for every ship and fires the
//! broadsides it asks for.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use corsair_core::components::{Cannonball, PirateShip, ShipAi};
use corsair_core::enums::ShotOwner;
use corsair_core::events::GameEvent;
use corsair_core::types::{Position, ShipId};

use corsair_ai::fsm::{update, AiContext, FireOrder, IncomingShot};

/// Run the AI for every pirate ship.
pub fn run(world: &mut World, player: Position, dt: f64, rng: &mut ChaCha8Rng, events: &mut Vec<GameEvent>) {
    let shots = incoming_shots(world);
    let ctx = AiContext {
        player,
        shots: &shots,
        dt,
    };

    // Shots are spawned after the query so the world is not borrowed twice.
    let mut volleys: Vec<(ShipId, Position, FireOrder)> = Vec::new();

    for (_entity, (pos, ship, ai)) in world.query_mut::<(&mut Position, &mut PirateShip, &mut ShipAi)>() {
        let outcome = update(pos, ship, ai, &ctx, rng);
        if outcome.state_changed {
            debug!(ship = ship.id.0, state = ?ai.state, "pirate changed state");
        }
        if let Some(order) = outcome.fire {
            volleys.push((ship.id, *pos, order));
        }
    }

    for (id, from, order) in volleys {
        let owner = ShotOwner::Pirate(id);
        crate::ballistics::spawn_cannonball(world, owner, from, order.target, order.speed, order.damage);
        events.push(GameEvent::CannonFired {
            owner,
            from,
            target: order.target,
        });
    }
}

fn incoming_shots(world: &World) -> Vec<IncomingShot> {
    world
        .query::<(&Position, &Cannonball)>()
        .iter()
        .map(|(_entity, (pos, ball))| IncomingShot {
            position: *pos,
            z: ball.z,
            velocity: ball.velocity,
            owner: ball.owner,
        })
        .collect()
}
