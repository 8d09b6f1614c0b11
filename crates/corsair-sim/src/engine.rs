//! Simulation engine: the per-frame heart of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the static sea chart, the
//! player's ship and the session RNG. The caller drives it once per display
//! refresh with the elapsed wall-clock time and an input snapshot. Completely
//! headless, so sessions are reproducible from a seed.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use corsair_core::components::{Camera, PlayerShip};
use corsair_core::constants::{ASSUMED_FRAME_MS, MAX_FRAME_DT};
use corsair_core::events::GameEvent;
use corsair_core::input::InputState;
use corsair_core::state::{HudUpdate, WorldSnapshot};
use corsair_core::types::{SimTime, Viewport};
use corsair_procgen::{create_player, PlayerOptions};

use crate::systems;
use crate::world_setup::{self, SeaChart};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. Same seed and same inputs give the same session.
    pub seed: u64,
    /// Captain options from the menu.
    pub player: PlayerOptions,
    /// Initial drawing surface size.
    pub viewport: Viewport,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player: PlayerOptions::default(),
            viewport: Viewport::default(),
        }
    }
}

/// What one frame produced for the collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    /// Simulated seconds this frame advanced.
    pub dt: f64,
    pub hud: HudUpdate,
    pub events: Vec<GameEvent>,
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    chart: SeaChart,
    player: PlayerShip,
    camera: Camera,
    viewport: Viewport,
    time: SimTime,
    rng: ChaCha8Rng,
    despawn_buffer: Vec<Entity>,
}

/// Convert elapsed wall-clock milliseconds into a tick-normalized delta,
/// clamped so a long stall never advances the world more than one step.
pub fn frame_dt(raw_ms: f64) -> f64 {
    if !raw_ms.is_finite() || raw_ms <= 0.0 {
        return 0.0;
    }
    (raw_ms / ASSUMED_FRAME_MS).min(MAX_FRAME_DT)
}

impl SimulationEngine {
    /// Generate a new world and put the player at the map center.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut world = World::new();
        let chart = world_setup::setup_world(&mut world, &mut rng);
        let player = create_player(&config.player);

        let mut camera = Camera::default();
        systems::camera::run(&mut camera, &player, config.viewport);

        info!(
            seed = config.seed,
            captain = %player.name,
            level = player.level,
            islands = chart.islands.len(),
            "session started"
        );

        Self {
            world,
            chart,
            player,
            camera,
            viewport: config.viewport,
            time: SimTime::default(),
            rng,
            despawn_buffer: Vec::new(),
        }
    }

    /// Advance by one rendered frame. `elapsed_ms` is the wall-clock time
    /// since the previous frame.
    pub fn frame(&mut self, elapsed_ms: f64, input: &InputState) -> FrameOutcome {
        self.step(frame_dt(elapsed_ms), input)
    }

    /// Advance by an explicit delta (already clamped by the caller).
    pub fn step(&mut self, dt: f64, input: &InputState) -> FrameOutcome {
        let mut events = Vec::new();
        self.run_systems(dt, input, &mut events);
        self.time.advance(dt);

        FrameOutcome {
            dt,
            hud: HudUpdate::from_player(&self.player),
            events,
        }
    }

    /// Build a render snapshot of the current state.
    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.chart, &self.player, self.camera, self.time)
    }

    /// Resize the drawing surface and re-frame the camera.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        systems::camera::run(&mut self.camera, &self.player, viewport);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn player(&self) -> &PlayerShip {
        &self.player
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn chart(&self) -> &SeaChart {
        &self.chart
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerShip {
        &mut self.player
    }

    #[cfg(test)]
    pub fn chart_mut(&mut self) -> &mut SeaChart {
        &mut self.chart
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64, input: &InputState, events: &mut Vec<GameEvent>) {
        // 1. Input, reload countdown, player gunnery
        systems::player_control::run(&mut self.world, &mut self.player, input, dt, events);
        // 2. Player movement
        systems::movement::run(&mut self.player, dt);
        // 3. Island collisions
        systems::collision::run(&mut self.player, &self.chart.islands, &mut self.rng, events);
        // 4. Pirate AI
        systems::pirate_ai::run(&mut self.world, self.player.position, dt, &mut self.rng, events);
        // 5. Cannonball flight and impacts
        systems::cannonballs::run(
            &mut self.world,
            &mut self.player,
            dt,
            &mut self.rng,
            events,
            &mut self.despawn_buffer,
        );
        // 6. Loot and treasure pickups
        systems::pickups::run(&mut self.world, &mut self.player, events, &mut self.despawn_buffer);
        // 7. Levelling
        systems::progression::run(&mut self.player, events);
        // 8. Effect decay
        systems::effects::run(&mut self.world, dt, &mut self.despawn_buffer);
        // 9. Camera
        systems::camera::run(&mut self.camera, &self.player, self.viewport);
    }
}
