//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::ShipId;

/// Pirate ship behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiState {
    /// Wandering; not interested in the player.
    #[default]
    Patrol,
    /// Provoked and closing on a flanking point beside the player.
    Chase,
    /// Circling the player at engagement distance, firing broadsides.
    Attack,
}

/// Decorative sea creature species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureKind {
    Shark,
    Serpent,
    Kraken,
}

/// What a loot drop contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LootKind {
    Gold,
    Jewelry,
    Ammunition,
}

/// Cosmetic effect type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    HitFlash,
    Explosion,
}

/// Who fired a cannonball. Decides self-damage and PvP rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotOwner {
    Player,
    Pirate(ShipId),
}

impl ShotOwner {
    pub fn is_player(&self) -> bool {
        matches!(self, ShotOwner::Player)
    }
}

impl CreatureKind {
    pub const ALL: [CreatureKind; 3] = [CreatureKind::Shark, CreatureKind::Serpent, CreatureKind::Kraken];
}
