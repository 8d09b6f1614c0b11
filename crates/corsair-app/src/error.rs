//! Error types for the session layer. The simulation itself never fails.

use thiserror::Error;

/// Why a session could not start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("no drawing surface available; the game cannot start")]
    MissingSurface,
    #[error("drawing surface has unusable size {width}x{height}")]
    InvalidSurface { width: f64, height: f64 },
    #[error("a session is already running")]
    AlreadyRunning,
}

/// A sprite sheet failed to load. Rendering falls back to placeholder shapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpriteError {
    #[error("sprite sheet {name} failed to load: {reason}")]
    LoadFailed { name: String, reason: String },
}

/// A configuration value could not be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}
