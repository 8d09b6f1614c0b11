//! Snapshots handed to the external collaborators after each frame.

use serde::{Deserialize, Serialize};

use crate::components::{Camera, Creature, Island, PlayerShip};
use crate::enums::*;
use crate::types::{Position, ShipId, SimTime};

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub camera: Camera,
    pub islands: Vec<Island>,
    pub creatures: Vec<Creature>,
    pub ships: Vec<ShipView>,
    pub cannonballs: Vec<CannonballView>,
    pub loot: Vec<LootView>,
    pub treasures: Vec<TreasureView>,
    pub effects: Vec<EffectView>,
    pub player: PlayerView,
}

/// A pirate ship as drawn on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub id: ShipId,
    pub name: String,
    pub position: Position,
    pub heading: f64,
    pub level: u32,
    pub size: f64,
    pub state: AiState,
    /// Health in [0, 100] for the name-plate bar.
    pub health: f64,
}

/// A cannonball; `z` drives shadow offset and scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CannonballView {
    pub position: Position,
    pub z: f64,
    pub owner: ShotOwner,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LootView {
    pub position: Position,
    pub kind: LootKind,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TreasureView {
    pub position: Position,
    pub gold: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectView {
    pub position: Position,
    pub kind: EffectKind,
    pub alpha: f64,
    pub radius: f64,
}

/// The player's ship as drawn on screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub position: Position,
    pub heading: f64,
    pub level: u32,
    pub health: f64,
    pub target: Option<Position>,
}

/// Partial stats record for the HUD. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jewelry: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ammunition: Option<u32>,
    /// Health percentage in [0, 100].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<f64>,
    /// Progress to the next level in [0, 100].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp: Option<f64>,
}

impl HudUpdate {
    /// Full stats record for the player's current state.
    pub fn from_player(player: &PlayerShip) -> Self {
        let xp = if player.xp_to_next == 0 {
            100.0
        } else {
            (player.xp as f64 / player.xp_to_next as f64 * 100.0).clamp(0.0, 100.0)
        };
        Self {
            level: Some(player.level),
            gold: Some(player.gold),
            jewelry: Some(player.jewelry),
            ammunition: Some(player.cannonballs),
            health: Some(player.hull.percent()),
            xp: Some(xp),
        }
    }

    /// Overlay the fields present in `other` onto `self`.
    pub fn merge(&mut self, other: &HudUpdate) {
        if other.level.is_some() {
            self.level = other.level;
        }
        if other.gold.is_some() {
            self.gold = other.gold;
        }
        if other.jewelry.is_some() {
            self.jewelry = other.jewelry;
        }
        if other.ammunition.is_some() {
            self.ammunition = other.ammunition;
        }
        if other.health.is_some() {
            self.health = other.health;
        }
        if other.xp.is_some() {
            self.xp = other.xp;
        }
    }
}

impl From<&PlayerShip> for PlayerView {
    fn from(player: &PlayerShip) -> Self {
        Self {
            name: player.name.clone(),
            position: player.position,
            heading: player.heading,
            level: player.level,
            health: player.hull.percent(),
            target: player.target,
        }
    }
}
