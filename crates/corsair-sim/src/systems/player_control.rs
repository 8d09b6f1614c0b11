//! Player input: movement orders, reload countdown, and gunnery.

use hecs::World;
use tracing::trace;

use corsair_core::components::PlayerShip;
use corsair_core::constants::*;
use corsair_core::enums::ShotOwner;
use corsair_core::events::GameEvent;
use corsair_core::input::InputState;
use corsair_core::types::Position;

use crate::ballistics::{shot_damage, spawn_cannonball};

/// Apply this frame's input snapshot and tick the reload timer.
pub fn run(world: &mut World, player: &mut PlayerShip, input: &InputState, dt: f64, events: &mut Vec<GameEvent>) {
    player.cannon_cooldown = (player.cannon_cooldown - dt).max(0.0);

    if let Some(target) = input.move_target {
        player.target = Some(target);
    }

    if input.fire {
        if let Some(cursor) = input.cursor {
            try_fire(world, player, cursor, events);
        }
    }
}

/// Fire at `aim`, limited to weapon range. Does nothing while reloading or
/// with an empty magazine. Returns whether a shot left the barrel.
pub fn try_fire(world: &mut World, player: &mut PlayerShip, aim: Position, events: &mut Vec<GameEvent>) -> bool {
    if player.cannon_cooldown > 0.0 || player.cannonballs == 0 {
        trace!(
            cooldown = player.cannon_cooldown,
            ammo = player.cannonballs,
            "player cannon not ready"
        );
        return false;
    }

    let target = clamp_to_range(player.position, aim, player.weapon_range);
    spawn_cannonball(
        world,
        ShotOwner::Player,
        player.position,
        target,
        shot_speed(player.level),
        shot_damage(player.level),
    );
    player.cannonballs -= 1;
    player.cannon_cooldown = reload_time(player.level);
    events.push(GameEvent::CannonFired {
        owner: ShotOwner::Player,
        from: player.position,
        target,
    });
    true
}

/// Pull `aim` back along the line of fire so it is at most `range` away.
pub fn clamp_to_range(from: Position, aim: Position, range: f64) -> Position {
    if from.distance_to(&aim) <= range {
        aim
    } else {
        from.offset(from.angle_to(&aim), range)
    }
}

pub fn shot_speed(level: u32) -> f64 {
    PLAYER_SHOT_SPEED_BASE + level as f64 * PLAYER_SHOT_SPEED_PER_LEVEL
}

pub fn reload_time(level: u32) -> f64 {
    PLAYER_RELOAD_BASE - (level as f64 * PLAYER_RELOAD_PER_LEVEL).min(PLAYER_RELOAD_CAP)
}
