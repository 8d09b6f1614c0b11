//! Runtime configuration from the environment.
//!
//! | Variable          | Meaning                          | Default |
//! |-------------------|----------------------------------|---------|
//! | `CORSAIR_SEED`    | world seed                       | 42      |
//! | `CORSAIR_CAPTAIN` | captain name                     | Captain |
//! | `CORSAIR_LEVEL`   | starting level (clamped 1..=10)  | 1       |
//! | `CORSAIR_FRAMES`  | frames for the headless runner   | 1800    |
//!
//! A `.env` file in the working directory is loaded first when present.

use corsair_core::constants::PLAYER_MAX_LEVEL;
use corsair_core::types::Viewport;
use corsair_sim::{PlayerOptions, SimConfig};

use crate::error::ConfigError;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_FRAMES: u32 = 1800;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub seed: u64,
    pub captain: Option<String>,
    pub level: Option<u32>,
    pub frames: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            captain: None,
            level: None,
            frames: DEFAULT_FRAMES,
        }
    }
}

impl AppConfig {
    /// Read the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or blank keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Ok(Self {
            seed: parse_number(get("CORSAIR_SEED"), "CORSAIR_SEED")?.unwrap_or(defaults.seed),
            captain: get("CORSAIR_CAPTAIN"),
            level: parse_number(get("CORSAIR_LEVEL"), "CORSAIR_LEVEL")?.map(|l: u32| l.clamp(1, PLAYER_MAX_LEVEL)),
            frames: parse_number(get("CORSAIR_FRAMES"), "CORSAIR_FRAMES")?.unwrap_or(defaults.frames),
        })
    }

    /// The simulation config for a session on the given surface.
    pub fn sim_config(&self, viewport: Viewport) -> SimConfig {
        SimConfig {
            seed: self.seed,
            player: PlayerOptions {
                name: self.captain.clone(),
                level: self.level,
            },
            viewport,
        }
    }
}

fn parse_number<T: std::str::FromStr>(raw: Option<String>, key: &'static str) -> Result<Option<T>, ConfigError> {
    raw.map(|value| value.parse::<T>().map_err(|_| ConfigError::InvalidNumber { key, value }))
        .transpose()
}
