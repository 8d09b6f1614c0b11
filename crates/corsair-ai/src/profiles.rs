//! Level-derived combat profile.
//!
//! Consolidates every number the state machine scales by ship level.

use corsair_core::constants::*;
use corsair_core::math::clamp;

/// Combat parameters for a pirate of a given level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PirateProfile {
    /// Distance within which a provoked ship engages.
    pub aggro_range: f64,
    /// Distance within which an engaged ship circles and fires.
    pub attack_range: f64,
    /// Radius of the flanking and circling paths around the player.
    pub engagement_distance: f64,
    /// Angular rate of the attack circle (radians per second).
    pub circle_rate: f64,
    /// Seconds between broadsides.
    pub reload_time: f64,
    /// Horizontal muzzle speed.
    pub shot_speed: f64,
    /// Damage per cannonball.
    pub shot_damage: f64,
}

/// Get the combat profile for a given level.
pub fn profile_for_level(level: u32) -> PirateProfile {
    let lvl = level as f64;
    PirateProfile {
        aggro_range: AGGRO_RANGE_BASE + lvl * AGGRO_RANGE_PER_LEVEL,
        attack_range: ATTACK_RANGE_BASE + lvl * ATTACK_RANGE_PER_LEVEL,
        engagement_distance: engagement_distance(level),
        circle_rate: CIRCLE_RATE_BASE + lvl * CIRCLE_RATE_PER_LEVEL,
        reload_time: PIRATE_RELOAD_BASE - (lvl * PIRATE_RELOAD_PER_LEVEL).min(PIRATE_RELOAD_CAP),
        shot_speed: PIRATE_SHOT_SPEED_BASE + lvl * PIRATE_SHOT_SPEED_PER_LEVEL,
        shot_damage: SHOT_DAMAGE_BASE + lvl * SHOT_DAMAGE_PER_LEVEL,
    }
}

/// Preferred stand-off distance. Low-level ships hang back farther.
pub fn engagement_distance(level: u32) -> f64 {
    clamp(
        ENGAGE_DIST_BASE + (ENGAGE_DIST_LEVEL_PIVOT - level as f64) * ENGAGE_DIST_PER_LEVEL,
        ENGAGE_DIST_MIN,
        ENGAGE_DIST_MAX,
    )
}
