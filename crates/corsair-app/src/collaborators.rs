//! Interfaces to the outside world: drawing, the HUD, and sprite sheets.
//!
//! The simulation never calls these. The session hands them snapshots and
//! HUD records after each frame; a missing collaborator is skipped.

use std::f64::consts::TAU;

use tracing::info;

use corsair_core::constants::{PLAYER_MAX_LEVEL, SPRITE_DIRECTIONS};
use corsair_core::state::{HudUpdate, WorldSnapshot};

use crate::error::SpriteError;

/// Draws a frame. Must tolerate entities appearing and disappearing between
/// frames, and sprites that are not loaded yet.
pub trait Renderer {
    fn render(&mut self, snapshot: &WorldSnapshot, sprites: Option<&dyn SpriteSource>);
}

/// Presents player stats. Receives partial records; absent fields stay as they were.
pub trait Hud {
    fn update_hud(&mut self, stats: &HudUpdate);
}

/// Sprite sheets, addressed by name and heading.
pub trait SpriteSource {
    /// Begin loading every sheet. Failure is reported but never fatal.
    fn load_all(&mut self) -> Result<(), SpriteError>;

    /// The frame of sheet `name` facing `angle`, if that sheet is ready.
    fn frame(&self, name: &str, angle: f64) -> Option<FrameRef>;
}

/// A handle to one directional frame of a loaded sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRef {
    pub sheet: String,
    pub index: usize,
}

/// Map a heading to the nearest of the sheet's directional frames.
/// Frame 0 faces +x; indices increase with the angle.
pub fn direction_frame(angle: f64) -> usize {
    if !angle.is_finite() {
        return 0;
    }
    let turns = angle.rem_euclid(TAU) / TAU;
    (turns * SPRITE_DIRECTIONS as f64).round() as usize % SPRITE_DIRECTIONS
}

/// Sheet name for the player's ship at a given level.
pub fn player_sprite_name(level: u32) -> String {
    format!("ship_tier{}", level.clamp(1, PLAYER_MAX_LEVEL))
}

/// HUD that writes each update to the log. Used by the headless runner.
#[derive(Debug, Default)]
pub struct LogHud {
    current: HudUpdate,
    updates: u64,
    every: u64,
}

impl LogHud {
    /// Log one line every `every` updates.
    pub fn new(every: u64) -> Self {
        Self {
            current: HudUpdate::default(),
            updates: 0,
            every: every.max(1),
        }
    }

    pub fn current(&self) -> &HudUpdate {
        &self.current
    }
}

impl Hud for LogHud {
    fn update_hud(&mut self, stats: &HudUpdate) {
        self.current.merge(stats);
        self.updates += 1;
        if self.updates % self.every == 0 {
            info!(
                level = ?self.current.level,
                gold = ?self.current.gold,
                jewelry = ?self.current.jewelry,
                ammo = ?self.current.ammunition,
                health = ?self.current.health,
                xp = ?self.current.xp,
                "hud"
            );
        }
    }
}
