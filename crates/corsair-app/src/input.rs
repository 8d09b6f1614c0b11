//! Input capture.
//!
//! Platform events arrive between frames and are folded into a pending
//! state here. Once per frame the session takes an `InputState` snapshot;
//! one-shot actions (a new move order, a fire request) are cleared by the
//! snapshot so each is applied exactly once. The cursor is kept in screen
//! space and mapped through the camera at snapshot time, so it tracks the
//! point under the pointer while the camera follows the ship.

use std::collections::HashSet;

use corsair_core::components::Camera;
use corsair_core::input::{InputEvent, InputState};
use corsair_core::types::Position;

/// Keys that fire the cannons, lowercased.
const FIRE_KEYS: [&str; 2] = [" ", "space"];

#[derive(Debug, Clone, Default)]
pub struct InputCapture {
    keys: HashSet<String>,
    /// Last pointer position in screen coordinates.
    cursor: Option<(f64, f64)>,
    move_target: Option<Position>,
    fire: bool,
}

/// Convert a screen point to world coordinates under the given camera.
pub fn screen_to_world(screen_x: f64, screen_y: f64, camera: Camera) -> Position {
    Position::new(screen_x + camera.x, screen_y + camera.y)
}

impl InputCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one platform event into the pending state.
    pub fn handle(&mut self, event: &InputEvent, camera: Camera) {
        match event {
            InputEvent::KeyDown { key } => {
                let key = key.to_lowercase();
                // Held keys auto-repeat; only the press edge fires.
                if FIRE_KEYS.contains(&key.as_str()) && !self.keys.contains(&key) {
                    self.fire = true;
                }
                self.keys.insert(key);
            }
            InputEvent::KeyUp { key } => {
                self.keys.remove(&key.to_lowercase());
            }
            InputEvent::PointerMoved { screen_x, screen_y } => {
                self.cursor = Some((*screen_x, *screen_y));
            }
            InputEvent::PrimaryClick { screen_x, screen_y } => {
                self.cursor = Some((*screen_x, *screen_y));
                self.move_target = Some(screen_to_world(*screen_x, *screen_y, camera));
            }
            InputEvent::SecondaryClick { screen_x, screen_y } => {
                self.cursor = Some((*screen_x, *screen_y));
                self.fire = true;
            }
        }
    }

    /// Take this frame's snapshot under the current camera and clear the
    /// one-shot actions.
    pub fn snapshot(&mut self, camera: Camera) -> InputState {
        InputState {
            keys: self.keys.clone(),
            cursor: self.cursor.map(|(x, y)| screen_to_world(x, y, camera)),
            move_target: self.move_target.take(),
            fire: std::mem::take(&mut self.fire),
        }
    }
}
