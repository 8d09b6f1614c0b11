//! Entity factory: the pirate fleet and the player's ship.

use std::f64::consts::TAU;

use rand::Rng;

use corsair_core::components::{Hull, PirateShip, PlayerShip, ShipAi};
use corsair_core::constants::*;
use corsair_core::enums::AiState;
use corsair_core::math::rand_range;
use corsair_core::types::{Position, ShipId, Velocity};

/// Everything needed to put one pirate ship into the world.
#[derive(Debug, Clone)]
pub struct PirateSpawn {
    pub position: Position,
    pub ship: PirateShip,
    pub hull: Hull,
    pub ai: ShipAi,
}

/// Captain options chosen in the menu.
#[derive(Debug, Clone, Default)]
pub struct PlayerOptions {
    pub name: Option<String>,
    pub level: Option<u32>,
}

/// Build the initial pirate fleet.
pub fn generate_pirate_fleet<R: Rng + ?Sized>(rng: &mut R) -> Vec<PirateSpawn> {
    (0..PIRATE_COUNT).map(|i| spawn_pirate(rng, i as u32)).collect()
}

fn spawn_pirate<R: Rng + ?Sized>(rng: &mut R, index: u32) -> PirateSpawn {
    let level = rand_range(rng, PIRATE_MIN_LEVEL, PIRATE_MAX_LEVEL).round().max(1.0) as u32;
    let max_hp = PIRATE_BASE_HP + level as f64 * PIRATE_HP_PER_LEVEL;

    PirateSpawn {
        position: random_sea_position(rng),
        ship: PirateShip {
            id: ShipId(index),
            name: PIRATE_NAMES[index as usize % PIRATE_NAMES.len()].to_string(),
            heading: rand_range(rng, 0.0, TAU),
            speed: rand_range(rng, PIRATE_MIN_SPEED, PIRATE_MAX_SPEED),
            level,
            size: rand_range(rng, PIRATE_MIN_SIZE, PIRATE_MAX_SIZE).round(),
        },
        hull: Hull::full(max_hp),
        ai: new_ship_ai(rng, level),
    }
}

/// Fresh AI memory for a ship of the given level.
pub fn new_ship_ai<R: Rng + ?Sized>(rng: &mut R, level: u32) -> ShipAi {
    ShipAi {
        state: AiState::Patrol,
        cannon_cooldown: 0.0,
        state_timer: rand_range(rng, PIRATE_INITIAL_TIMER_MIN, PIRATE_INITIAL_TIMER_MAX),
        aggression_timer: 0.0,
        aggro_range: AGGRO_RANGE_BASE + level as f64 * AGGRO_RANGE_PER_LEVEL,
        attack_range: ATTACK_RANGE_BASE + level as f64 * ATTACK_RANGE_PER_LEVEL,
        flank_side: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
        circle_phase: rand_range(rng, 0.0, TAU),
    }
}

/// Uniform point inside the map, inset from the edges. Used for spawns and respawns.
pub fn random_sea_position<R: Rng + ?Sized>(rng: &mut R) -> Position {
    Position::new(
        rand_range(rng, SPAWN_INSET, MAP_WIDTH - SPAWN_INSET),
        rand_range(rng, SPAWN_INSET, MAP_HEIGHT - SPAWN_INSET),
    )
}

/// The player's ship, at the map center with a full hull.
pub fn create_player(options: &PlayerOptions) -> PlayerShip {
    let name = options
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("Captain")
        .to_string();

    PlayerShip {
        name,
        position: Position::new(MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0),
        heading: 0.0,
        velocity: Velocity::default(),
        hull: Hull::full(PLAYER_MAX_HP),
        level: options.level.unwrap_or(1).clamp(1, PLAYER_MAX_LEVEL),
        xp: 0,
        xp_to_next: XP_TO_FIRST_LEVEL,
        gold: 0,
        jewelry: 0,
        cannonballs: PLAYER_START_AMMO,
        weapon_range: PLAYER_WEAPON_RANGE,
        cannon_cooldown: 0.0,
        target: None,
    }
}
