//! Simulation constants and tuning parameters.

// --- Frame timing ---

/// Assumed real-time frame interval (milliseconds) used to normalize frame deltas.
pub const ASSUMED_FRAME_MS: f64 = 16.666;

/// Upper bound on simulated time per frame.
pub const MAX_FRAME_DT: f64 = 1.0 / 15.0;

/// Fixed-step multiplier applied to ballistic integration (ticks per second).
pub const TICKS_PER_SECOND: f64 = 60.0;

// --- World bounds ---

/// Map width in world units.
pub const MAP_WIDTH: f64 = 4000.0;

/// Map height in world units.
pub const MAP_HEIGHT: f64 = 4000.0;

/// Inset from the map edge used for random spawns and respawns.
pub const SPAWN_INSET: f64 = 100.0;

// --- Map generation ---

/// Island count the generator tries to reach.
pub const TARGET_ISLAND_COUNT: usize = 35;

/// Rejection-sampling attempt budget for island placement.
pub const ISLAND_PLACEMENT_ATTEMPTS: u32 = 2000;

/// Island radius range.
pub const ISLAND_MIN_RADIUS: f64 = 60.0;
pub const ISLAND_MAX_RADIUS: f64 = 220.0;

/// Minimum gap between the circles of two islands.
pub const ISLAND_PADDING: f64 = 20.0;

/// Radius of the island-free circle around the map center (player spawn).
pub const SPAWN_CLEAR_RADIUS: f64 = 300.0;

/// Number of decorative creatures.
pub const CREATURE_COUNT: usize = 12;

/// Creature size range.
pub const CREATURE_MIN_SIZE: f64 = 18.0;
pub const CREATURE_MAX_SIZE: f64 = 80.0;

/// Number of treasures scattered at session start.
pub const TREASURE_COUNT: usize = 20;

/// Fraction of treasures placed on a ring around an island.
pub const TREASURE_ISLAND_BIAS: f64 = 0.6;

/// Ring offset (beyond the island radius) for island-biased treasures.
pub const TREASURE_RING_MIN: f64 = 30.0;
pub const TREASURE_RING_MAX: f64 = 90.0;

/// Treasure gold value range.
pub const TREASURE_MIN_GOLD: f64 = 20.0;
pub const TREASURE_MAX_GOLD: f64 = 60.0;

// --- Pirate fleet ---

/// Number of AI pirate ships.
pub const PIRATE_COUNT: usize = 10;

/// Pirate level range before rounding.
pub const PIRATE_MIN_LEVEL: f64 = 1.0;
pub const PIRATE_MAX_LEVEL: f64 = 8.0;

/// Hull: base + per-level hit points.
pub const PIRATE_BASE_HP: f64 = 30.0;
pub const PIRATE_HP_PER_LEVEL: f64 = 20.0;

/// Pirate hull size range.
pub const PIRATE_MIN_SIZE: f64 = 18.0;
pub const PIRATE_MAX_SIZE: f64 = 42.0;

/// Pirate base speed range (scaled by per-state multipliers).
pub const PIRATE_MIN_SPEED: f64 = 0.05;
pub const PIRATE_MAX_SPEED: f64 = 0.15;

/// Initial state timer range.
pub const PIRATE_INITIAL_TIMER_MIN: f64 = 1.0;
pub const PIRATE_INITIAL_TIMER_MAX: f64 = 4.0;

pub const PIRATE_NAMES: [&str; 10] = [
    "Blackbeard",
    "Anne Bonny",
    "Calico Jack",
    "Bartholomew Roberts",
    "Henry Morgan",
    "William Kidd",
    "Mary Read",
    "Edward Low",
    "Charles Vane",
    "François l'Olonnais",
];

// --- Pirate AI ---

/// Aggro range = base + per level.
pub const AGGRO_RANGE_BASE: f64 = 400.0;
pub const AGGRO_RANGE_PER_LEVEL: f64 = 20.0;

/// Attack range = base + per level.
pub const ATTACK_RANGE_BASE: f64 = 260.0;
pub const ATTACK_RANGE_PER_LEVEL: f64 = 10.0;

/// How long a pirate stays provoked after the player hits it.
pub const AGGRESSION_DURATION: f64 = 15.0;

/// Patrol timer resample range.
pub const PATROL_DURATION_MIN: f64 = 3.0;
pub const PATROL_DURATION_MAX: f64 = 8.0;

/// Per-frame heading drift while patrolling (scaled by dt).
pub const PATROL_DRIFT: f64 = 0.02;

/// Course change applied when the patrol timer runs out.
pub const PATROL_COURSE_CHANGE: f64 = std::f64::consts::FRAC_PI_4;

/// Speed multipliers per behavior.
pub const PATROL_SPEED_MULT: f64 = 40.0;
pub const CHASE_SPEED_MULT: f64 = 80.0;
pub const ATTACK_SPEED_MULT: f64 = 60.0;
pub const BACKOFF_SPEED_MULT: f64 = 30.0;
pub const EVASION_SPEED_MULT: f64 = 90.0;

/// Incoming shots closer than this trigger evasion.
pub const EVASION_RANGE: f64 = 110.0;

/// Minimum cannon cooldown forced while evading.
pub const EVASION_MIN_COOLDOWN: f64 = 0.25;

/// Desired engagement distance = clamp(base + (pivot - level) * step, min, max).
pub const ENGAGE_DIST_BASE: f64 = 220.0;
pub const ENGAGE_DIST_LEVEL_PIVOT: f64 = 6.0;
pub const ENGAGE_DIST_PER_LEVEL: f64 = 8.0;
pub const ENGAGE_DIST_MIN: f64 = 140.0;
pub const ENGAGE_DIST_MAX: f64 = 320.0;

/// Ships closer than desired distance minus this margin back away first.
pub const BACKOFF_MARGIN: f64 = 20.0;

/// Circling angular rate = base + per level (radians per second).
pub const CIRCLE_RATE_BASE: f64 = 0.5;
pub const CIRCLE_RATE_PER_LEVEL: f64 = 0.05;

/// Broadside arc: heading-vs-bearing difference must fall strictly inside this window.
pub const BROADSIDE_ANGLE_MIN: f64 = 0.25;
pub const BROADSIDE_ANGLE_MAX: f64 = 1.6;

/// Pirate reload = base - min(cap, level * step).
pub const PIRATE_RELOAD_BASE: f64 = 1.4;
pub const PIRATE_RELOAD_PER_LEVEL: f64 = 0.04;
pub const PIRATE_RELOAD_CAP: f64 = 0.9;

/// Pirate muzzle speed = base + per level.
pub const PIRATE_SHOT_SPEED_BASE: f64 = 320.0;
pub const PIRATE_SHOT_SPEED_PER_LEVEL: f64 = 26.0;

/// Keep-away from the player = base + ship size.
pub const SEPARATION_DISTANCE: f64 = 40.0;

/// Fraction of the keep-away overlap removed per frame.
pub const SEPARATION_STRENGTH: f64 = 0.6;

// --- Ballistics ---

/// Gravity applied to cannonball vertical velocity (units per tick squared).
pub const GRAVITY: f64 = 0.8;

/// Minimum horizontal muzzle speed.
pub const MIN_SHOT_SPEED: f64 = 60.0;

/// Fallback muzzle speed when none is given.
pub const DEFAULT_SHOT_SPEED: f64 = 300.0;

/// Flight time clamp (seconds).
pub const MIN_FLIGHT_TIME: f64 = 0.5;
pub const MAX_FLIGHT_TIME: f64 = 3.0;

/// Launch height = base + min(cap, distance * factor).
pub const LAUNCH_HEIGHT_BASE: f64 = 40.0;
pub const LAUNCH_HEIGHT_FACTOR: f64 = 0.03;
pub const LAUNCH_HEIGHT_CAP: f64 = 80.0;

/// Damage = base + per shooter level.
pub const SHOT_DAMAGE_BASE: f64 = 20.0;
pub const SHOT_DAMAGE_PER_LEVEL: f64 = 4.0;

/// Splash radius within which a landing cannonball hits a ship.
pub const HIT_RADIUS: f64 = 28.0;

// --- Loot ---

/// Chance that the primary drop is gold rather than jewelry.
pub const LOOT_GOLD_CHANCE: f64 = 0.7;

/// Primary drop value = rand(min, max) + level * per_level.
pub const LOOT_VALUE_MIN: f64 = 10.0;
pub const LOOT_VALUE_MAX: f64 = 30.0;
pub const LOOT_VALUE_PER_LEVEL: f64 = 5.0;

/// Chance of an extra ammunition drop.
pub const AMMO_DROP_CHANCE: f64 = 0.5;
pub const AMMO_DROP_MIN: f64 = 5.0;
pub const AMMO_DROP_MAX: f64 = 15.0;
pub const AMMO_DROP_SCATTER: f64 = 20.0;

/// Pickup radius for loot and treasure.
pub const PICKUP_RADIUS: f64 = 40.0;

// --- Player ---

pub const PLAYER_MAX_HP: f64 = 100.0;
pub const PLAYER_START_AMMO: u32 = 50;
pub const PLAYER_WEAPON_RANGE: f64 = 420.0;
pub const PLAYER_MAX_LEVEL: u32 = 10;

/// Base sailing speed (units per second) before the level multiplier.
pub const PLAYER_BASE_SPEED: f64 = 64.0;

/// Speed multiplier = max(floor, base - level * step).
pub const PLAYER_SPEED_MULT_BASE: f64 = 2.0;
pub const PLAYER_SPEED_MULT_PER_LEVEL: f64 = 0.08;
pub const PLAYER_SPEED_MULT_FLOOR: f64 = 1.0;

/// Click-to-move arrival radius.
pub const ARRIVAL_RADIUS: f64 = 5.0;

/// Per-frame velocity damping while coasting without a target.
pub const COAST_DAMPING: f64 = 0.85;

/// Player reload = base - min(cap, level * step).
pub const PLAYER_RELOAD_BASE: f64 = 1.0;
pub const PLAYER_RELOAD_PER_LEVEL: f64 = 0.05;
pub const PLAYER_RELOAD_CAP: f64 = 0.5;

/// Player muzzle speed = base + per level.
pub const PLAYER_SHOT_SPEED_BASE: f64 = 360.0;
pub const PLAYER_SHOT_SPEED_PER_LEVEL: f64 = 20.0;

// --- Island collision ---

/// Player hull radius used for island contact.
pub const HULL_CONTACT_RADIUS: f64 = 12.0;

/// Extra clearance past contact after a push-out.
pub const HULL_PUSH_CLEARANCE: f64 = 2.0;

/// Velocity factor after bumping an island.
pub const COLLISION_BUMP_DAMPING: f64 = 0.2;

/// Hull damage per unit of push distance.
pub const COLLISION_DAMAGE_PER_UNIT: f64 = 0.02;

// --- Progression ---

pub const XP_TO_FIRST_LEVEL: u32 = 100;
pub const XP_GROWTH: f64 = 1.25;
pub const XP_PER_SINK_BASE: u32 = 20;
pub const XP_PER_SINK_PER_LEVEL: u32 = 10;
pub const XP_PER_TREASURE: u32 = 5;
pub const HP_PER_PLAYER_LEVEL: f64 = 10.0;

// --- Effects ---

pub const HIT_FLASH_LIFETIME: f64 = 0.3;
pub const HIT_FLASH_RADIUS: f64 = 18.0;
pub const EXPLOSION_LIFETIME: f64 = 0.8;
pub const EXPLOSION_RADIUS: f64 = 48.0;

// --- Sprites ---

/// Directional frames per ship sprite sheet.
pub const SPRITE_DIRECTIONS: usize = 16;
