//! Core types and definitions for the Corsair naval simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! records, enums, input snapshots, events, snapshots, and tuning constants.
//! It has no dependency on any renderer, windowing layer, or ECS.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod math;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
