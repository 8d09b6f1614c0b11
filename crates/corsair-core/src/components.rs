//! Entity records and ECS components.
//!
//! Components are plain data structs. Every field is initialised at
//! construction; game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, ShipId, Velocity};

/// An island: a solid circle ships cannot sail through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Island {
    pub position: Position,
    pub radius: f64,
}

/// A decorative sea creature. No behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub position: Position,
    pub kind: CreatureKind,
    pub size: f64,
}

/// Buried treasure waiting for the player to sail over it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Treasure {
    pub gold: u32,
}

/// Identity and hull shape of an AI pirate ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PirateShip {
    pub id: ShipId,
    pub name: String,
    /// Heading in radians (atan2 convention).
    pub heading: f64,
    /// Base speed, scaled by the per-behavior multiplier.
    pub speed: f64,
    pub level: u32,
    pub size: f64,
}

/// Hit points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hull {
    pub hp: f64,
    pub max_hp: f64,
}

/// Per-ship AI memory. Flank side and circling phase are fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipAi {
    pub state: AiState,
    /// Seconds until the cannons are reloaded.
    pub cannon_cooldown: f64,
    /// Patrol persistence timer.
    pub state_timer: f64,
    /// Seconds the ship remains provoked after being hit by the player.
    pub aggression_timer: f64,
    pub aggro_range: f64,
    pub attack_range: f64,
    /// +1.0 or -1.0: which side of the player the ship flanks toward.
    pub flank_side: f64,
    /// Current angle on the attack circle around the player.
    pub circle_phase: f64,
}

/// A cannonball in flight. Horizontal position lives in the `Position` component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cannonball {
    /// Height above the water.
    pub z: f64,
    /// Horizontal velocity (units per tick).
    pub velocity: Velocity,
    /// Vertical velocity (units per tick).
    pub vz: f64,
    pub owner: ShotOwner,
    pub damage: f64,
    /// Simulated seconds since launch.
    pub travel_time: f64,
}

/// Loot floating where a pirate ship sank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LootDrop {
    pub kind: LootKind,
    pub value: u32,
}

/// Short-lived cosmetic effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualEffect {
    pub kind: EffectKind,
    pub lifetime: f64,
    pub remaining: f64,
    pub alpha: f64,
    pub radius: f64,
    pub max_radius: f64,
}

/// The player's ship. Owned directly by the simulation engine, not the ECS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerShip {
    pub name: String,
    pub position: Position,
    /// Heading in radians (atan2 convention).
    pub heading: f64,
    pub velocity: Velocity,
    pub hull: Hull,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub gold: u32,
    pub jewelry: u32,
    pub cannonballs: u32,
    pub weapon_range: f64,
    pub cannon_cooldown: f64,
    /// Click-to-move destination.
    pub target: Option<Position>,
}

/// Top-left corner of the viewport in world coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
}

impl Hull {
    pub fn full(max_hp: f64) -> Self {
        Self { hp: max_hp, max_hp }
    }

    /// Health as a percentage in [0, 100].
    pub fn percent(&self) -> f64 {
        if self.max_hp <= 0.0 {
            return 0.0;
        }
        (self.hp / self.max_hp * 100.0).clamp(0.0, 100.0)
    }

    pub fn is_sunk(&self) -> bool {
        self.hp <= 0.0
    }
}

impl VisualEffect {
    pub fn new(kind: EffectKind, lifetime: f64, max_radius: f64) -> Self {
        let radius = match kind {
            EffectKind::HitFlash => max_radius,
            EffectKind::Explosion => max_radius * 0.5,
        };
        Self {
            kind,
            lifetime,
            remaining: lifetime,
            alpha: 1.0,
            radius,
            max_radius,
        }
    }
}
