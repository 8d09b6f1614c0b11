//! Systems run once per frame, in the order the engine calls them.
//!
//! Systems are plain functions over the world and the player. They do not
//! own state; everything lives in components, the player record, or the
//! engine's buffers.

pub mod camera;
pub mod cannonballs;
pub mod collision;
pub mod effects;
pub mod movement;
pub mod pickups;
pub mod pirate_ai;
pub mod player_control;
pub mod progression;
pub mod snapshot;
