//! Player input as seen by the simulation.
//!
//! The input-capture layer owns writes; a simulation frame only ever reads an
//! `InputState` snapshot, so input is sampled exactly once per frame.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Raw input events delivered by the platform between frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// A key went down. Key names are compared lowercased.
    KeyDown { key: String },
    KeyUp { key: String },
    /// Pointer moved, in screen coordinates.
    PointerMoved { screen_x: f64, screen_y: f64 },
    /// Primary button: sail to this point.
    PrimaryClick { screen_x: f64, screen_y: f64 },
    /// Secondary button: fire at this point.
    SecondaryClick { screen_x: f64, screen_y: f64 },
}

/// Input snapshot for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    /// Keys currently held, lowercased.
    pub keys: HashSet<String>,
    /// Last known cursor position in world coordinates.
    pub cursor: Option<Position>,
    /// New click-to-move destination issued since the previous frame.
    pub move_target: Option<Position>,
    /// A fire action was triggered since the previous frame.
    pub fire: bool,
}

impl InputState {
    pub fn is_down(&self, key: &str) -> bool {
        self.keys.contains(&key.to_lowercase())
    }
}
