//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{LootKind, ShotOwner};
use crate::types::{Position, ShipId};

/// Something noteworthy that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A cannon was fired.
    CannonFired { owner: ShotOwner, from: Position, target: Position },
    /// A pirate ship was hit by the player.
    ShipHit { ship_id: ShipId, damage: f64, remaining_hp: f64 },
    /// A pirate ship sank and respawned elsewhere.
    ShipSunk { ship_id: ShipId, name: String, level: u32, at: Position },
    /// The player was hit.
    PlayerHit { by: ShipId, damage: f64, remaining_hp: f64 },
    /// The player sank and respawned at the map center.
    PlayerSunk,
    /// The player scooped up floating loot.
    LootCollected { kind: LootKind, value: u32 },
    /// The player dug up a treasure.
    TreasureCollected { gold: u32 },
    /// The player reached a new level.
    LevelUp { level: u32 },
    /// The player's hull scraped an island.
    HullScraped { damage: f64 },
}
