//! Scripted captain for headless runs.
//!
//! Produces the same platform events a person would: clicks to sail
//! between waypoints, pointer moves to aim, and taps of the fire key when a
//! pirate is in range. No randomness, so a seeded headless run is
//! reproducible end to end.

use std::f64::consts::TAU;

use corsair_core::constants::{MAP_HEIGHT, MAP_WIDTH, PLAYER_WEAPON_RANGE};
use corsair_core::input::InputEvent;
use corsair_core::state::{ShipView, WorldSnapshot};
use corsair_core::types::Position;

/// Waypoints on a ring around the map center.
const WAYPOINT_COUNT: usize = 8;
const WAYPOINT_RING: f64 = 900.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    frame: u64,
    waypoint: usize,
    /// Frames between new move orders.
    steer_every: u64,
    /// Frames between shots.
    fire_every: u64,
    fire_held: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(240, 20)
    }
}

impl Autopilot {
    pub fn new(steer_every: u64, fire_every: u64) -> Self {
        Self {
            frame: 0,
            waypoint: 0,
            steer_every: steer_every.max(1),
            fire_every: fire_every.max(1),
            fire_held: false,
        }
    }

    /// World position of waypoint `index`.
    pub fn waypoint(index: usize) -> Position {
        let angle = TAU * (index % WAYPOINT_COUNT) as f64 / WAYPOINT_COUNT as f64;
        Position::new(MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0).offset(angle, WAYPOINT_RING)
    }

    /// Events to deliver before the next frame.
    pub fn next_events(&mut self, snapshot: &WorldSnapshot) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let camera = snapshot.camera;
        let to_screen = |p: Position| (p.x - camera.x, p.y - camera.y);

        if self.fire_held {
            events.push(InputEvent::KeyUp { key: " ".into() });
            self.fire_held = false;
        }

        if self.frame % self.steer_every == 0 {
            let (screen_x, screen_y) = to_screen(Self::waypoint(self.waypoint));
            events.push(InputEvent::PrimaryClick { screen_x, screen_y });
            self.waypoint = (self.waypoint + 1) % WAYPOINT_COUNT;
        }

        if self.frame % self.fire_every == 0 {
            if let Some(ship) = nearest_in_range(snapshot) {
                let (screen_x, screen_y) = to_screen(ship.position);
                events.push(InputEvent::PointerMoved { screen_x, screen_y });
                events.push(InputEvent::KeyDown { key: " ".into() });
                self.fire_held = true;
            }
        }

        self.frame += 1;
        events
    }
}

fn nearest_in_range(snapshot: &WorldSnapshot) -> Option<&ShipView> {
    let from = snapshot.player.position;
    snapshot
        .ships
        .iter()
        .map(|ship| (ship, from.distance_to(&ship.position)))
        .filter(|(_, d)| *d <= PLAYER_WEAPON_RANGE)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(ship, _)| ship)
}
