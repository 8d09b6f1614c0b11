//! Procedural world generation for Corsair.
//!
//! Island placement by rejection sampling, decorative creatures, treasure
//! scattering, and the entity factory for the pirate fleet and the player.
//! Every function takes the caller's RNG so sessions stay reproducible.

pub mod creatures;
pub mod fleet;
pub mod islands;
pub mod treasure;

pub use corsair_core as core;

pub use creatures::generate_creatures;
pub use fleet::{create_player, generate_pirate_fleet, random_sea_position, PirateSpawn, PlayerOptions};
pub use islands::generate_islands;
pub use treasure::{generate_treasures, TreasureSpawn};
