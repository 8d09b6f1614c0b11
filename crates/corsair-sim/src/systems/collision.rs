//! Player-vs-island collision response.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use corsair_core::components::{Island, PlayerShip};
use corsair_core::constants::*;
use corsair_core::events::GameEvent;

/// Push the player out of every island it touches. Each contact bumps the
/// velocity down and scrapes the hull in proportion to the push distance.
pub fn run(player: &mut PlayerShip, islands: &[Island], rng: &mut ChaCha8Rng, events: &mut Vec<GameEvent>) {
    for island in islands {
        let center = island.position.as_dvec2();
        let offset = player.position.as_dvec2() - center;
        let dist = offset.length();
        let contact = island.radius + HULL_CONTACT_RADIUS;
        if dist > contact {
            continue;
        }

        let clearance = contact + HULL_PUSH_CLEARANCE;
        let normal = if dist > 0.0 {
            offset / dist
        } else {
            DVec2::from_angle(rng.gen_range(0.0..TAU))
        };
        player.position = (center + normal * clearance).into();
        player.velocity.scale(COLLISION_BUMP_DAMPING);

        let damage = COLLISION_DAMAGE_PER_UNIT * (clearance - dist);
        player.hull.hp = (player.hull.hp - damage).max(0.0);
        events.push(GameEvent::HullScraped { damage });
    }
}
