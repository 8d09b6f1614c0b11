//! Simulation engine for Corsair.
//!
//! Owns the hecs ECS world, runs the per-frame systems in a fixed order,
//! and produces HUD updates, game events and `WorldSnapshot`s for the
//! front end.

pub mod ballistics;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use corsair_core as core;
pub use corsair_procgen::PlayerOptions;
pub use engine::{frame_dt, FrameOutcome, SimConfig, SimulationEngine};
pub use world_setup::SeaChart;
