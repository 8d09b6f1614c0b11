//! Pirate AI for Corsair.
//!
//! Implements the per-ship behavior state machine (evasion, patrol,
//! flanking chase, broadside attack, separation) and the level-derived
//! combat profile it reads from.

pub mod fsm;
pub mod profiles;

pub use corsair_core as core;

#[cfg(test)]
mod tests;
