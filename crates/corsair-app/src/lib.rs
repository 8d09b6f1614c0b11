//! Session driver for Corsair.
//!
//! Wires the headless simulation to its outside world: input capture,
//! renderer/HUD/sprite collaborators, start-up validation, environment
//! configuration and tracing.

pub mod autopilot;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod input;
pub mod session;
pub mod telemetry;

pub use corsair_sim as sim;
pub use error::{ConfigError, SessionError, SpriteError};
pub use session::{Collaborators, GameSession};
