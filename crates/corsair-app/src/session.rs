//! Game session lifecycle.
//!
//! `GameSession` wires a `SimulationEngine` to its collaborators. The host
//! calls `start` once with a drawing surface, forwards platform input via
//! `handle_input`, and calls `on_animation_frame` on every display refresh.
//! Missing or broken collaborators are logged and skipped; the simulation
//! keeps running without them.

use tracing::{error, info, warn};

use corsair_core::constants::ASSUMED_FRAME_MS;
use corsair_core::input::InputEvent;
use corsair_core::state::HudUpdate;
use corsair_core::types::Viewport;
use corsair_sim::{FrameOutcome, SimConfig, SimulationEngine};

use crate::collaborators::{Hud, Renderer, SpriteSource};
use crate::error::SessionError;
use crate::input::InputCapture;

/// The external pieces a session talks to. Any of them may be absent.
#[derive(Default)]
pub struct Collaborators {
    pub renderer: Option<Box<dyn Renderer>>,
    pub hud: Option<Box<dyn Hud>>,
    pub sprites: Option<Box<dyn SpriteSource>>,
}

#[derive(Default)]
pub struct GameSession {
    engine: Option<SimulationEngine>,
    collaborators: Collaborators,
    input: InputCapture,
    running: bool,
    last_timestamp: Option<f64>,
}

impl GameSession {
    pub fn new(collaborators: Collaborators) -> Self {
        Self {
            collaborators,
            ..Default::default()
        }
    }

    /// Generate the world and begin the frame loop.
    ///
    /// `surface` is the drawing surface size; without one there is nothing
    /// to play on and the session refuses to start.
    pub fn start(&mut self, mut config: SimConfig, surface: Option<Viewport>) -> Result<(), SessionError> {
        if self.running {
            return Err(SessionError::AlreadyRunning);
        }
        let Some(surface) = surface else {
            error!("no drawing surface, game not started");
            return Err(SessionError::MissingSurface);
        };
        if !(surface.width > 0.0 && surface.height > 0.0) {
            error!(width = surface.width, height = surface.height, "unusable drawing surface");
            return Err(SessionError::InvalidSurface {
                width: surface.width,
                height: surface.height,
            });
        }

        if let Some(sprites) = self.collaborators.sprites.as_mut() {
            if let Err(err) = sprites.load_all() {
                warn!(%err, "sprites unavailable, drawing fallback shapes");
            }
        }
        if self.collaborators.hud.is_none() {
            warn!("no HUD attached, stats will not be shown");
        }
        if self.collaborators.renderer.is_none() {
            warn!("no renderer attached, running headless");
        }

        config.viewport = surface;
        let engine = SimulationEngine::new(config);
        if let Some(hud) = self.collaborators.hud.as_mut() {
            hud.update_hud(&HudUpdate::from_player(engine.player()));
        }

        self.engine = Some(engine);
        self.input = InputCapture::new();
        self.last_timestamp = None;
        self.running = true;
        Ok(())
    }

    /// Forward a platform input event. Ignored before `start`.
    pub fn handle_input(&mut self, event: &InputEvent) {
        let Some(engine) = self.engine.as_ref() else {
            return;
        };
        self.input.handle(event, engine.camera());
    }

    /// Run one frame. `timestamp_ms` is the host's monotonic frame clock.
    /// Returns `None` when the session is not running.
    pub fn on_animation_frame(&mut self, timestamp_ms: f64) -> Option<FrameOutcome> {
        if !self.running {
            return None;
        }
        let engine = self.engine.as_mut()?;

        let elapsed = match self.last_timestamp {
            Some(last) => timestamp_ms - last,
            None => ASSUMED_FRAME_MS,
        };
        self.last_timestamp = Some(timestamp_ms);

        let input = self.input.snapshot(engine.camera());
        let outcome = engine.frame(elapsed, &input);

        if let Some(hud) = self.collaborators.hud.as_mut() {
            hud.update_hud(&outcome.hud);
        }
        if let Some(renderer) = self.collaborators.renderer.as_mut() {
            let snapshot = engine.snapshot();
            renderer.render(&snapshot, self.collaborators.sprites.as_deref());
        }
        Some(outcome)
    }

    /// The drawing surface changed size.
    pub fn resize(&mut self, surface: Viewport) {
        if !(surface.width > 0.0 && surface.height > 0.0) {
            warn!(width = surface.width, height = surface.height, "ignoring unusable surface size");
            return;
        }
        if let Some(engine) = self.engine.as_mut() {
            engine.set_viewport(surface);
        }
    }

    /// Halt the frame loop. The world is kept for inspection.
    pub fn stop(&mut self) {
        if self.running {
            if let Some(engine) = self.engine.as_ref() {
                info!(frames = engine.time().frame, "session stopped");
            }
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn engine(&self) -> Option<&SimulationEngine> {
        self.engine.as_ref()
    }
}
