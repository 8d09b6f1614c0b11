//! corsair-headless: run a seeded session with no window, driven by the autopilot.
//!
//! Usage:
//!   corsair-headless --frames 3600 --seed 7 --dump snapshot.json

use std::path::PathBuf;
use std::process;

use tracing::{error, info};

use corsair_app::autopilot::Autopilot;
use corsair_app::collaborators::LogHud;
use corsair_app::config::AppConfig;
use corsair_app::{Collaborators, GameSession};
use corsair_core::constants::ASSUMED_FRAME_MS;
use corsair_core::events::GameEvent;
use corsair_core::types::Viewport;

fn main() {
    corsair_app::telemetry::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "bad configuration");
            process::exit(2);
        }
    };
    if let Some(frames) = parse_flag::<u32>(&args, "--frames") {
        config.frames = frames;
    }
    if let Some(seed) = parse_flag::<u64>(&args, "--seed") {
        config.seed = seed;
    }
    let dump = flag_value(&args, "--dump").map(PathBuf::from);

    let viewport = Viewport::default();
    let mut session = GameSession::new(Collaborators {
        hud: Some(Box::new(LogHud::new(300))),
        ..Default::default()
    });
    if let Err(err) = session.start(config.sim_config(viewport), Some(viewport)) {
        error!(%err, "could not start session");
        process::exit(1);
    }

    let mut autopilot = Autopilot::default();
    let mut sunk = 0u32;
    let mut deaths = 0u32;
    let mut shots = 0u32;

    for frame in 0..config.frames {
        let Some(engine) = session.engine() else {
            break;
        };
        let snapshot = engine.snapshot();
        for event in autopilot.next_events(&snapshot) {
            session.handle_input(&event);
        }

        let Some(outcome) = session.on_animation_frame(frame as f64 * ASSUMED_FRAME_MS) else {
            break;
        };
        for event in &outcome.events {
            match event {
                GameEvent::ShipSunk { .. } => sunk += 1,
                GameEvent::PlayerSunk => deaths += 1,
                GameEvent::CannonFired { owner, .. } if owner.is_player() => shots += 1,
                _ => {}
            }
        }
    }

    if let Some(engine) = session.engine() {
        let player = engine.player();
        info!(
            frames = engine.time().frame,
            seconds = engine.time().elapsed_secs,
            level = player.level,
            gold = player.gold,
            jewelry = player.jewelry,
            shots,
            sunk,
            deaths,
            "run finished"
        );

        if let Some(path) = dump {
            let snapshot = engine.snapshot();
            let written = serde_json::to_string_pretty(&snapshot)
                .map_err(|e| e.to_string())
                .and_then(|json| std::fs::write(&path, json).map_err(|e| e.to_string()));
            if let Err(err) = written {
                error!(path = %path.display(), %err, "failed to write snapshot");
                process::exit(1);
            }
            info!(path = %path.display(), "snapshot written");
        }
    }
    session.stop();
}

fn print_usage() {
    eprintln!(
        "corsair-headless: run a Corsair session without a window\n\
         \n\
           --frames <N>   Frames to simulate (default: CORSAIR_FRAMES or 1800)\n\
           --seed <N>     World seed (default: CORSAIR_SEED or 42)\n\
           --dump <path>  Write the final world snapshot as JSON\n\
         \n\
         Logging follows RUST_LOG; set LOG_FORMAT=json for JSON lines.\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let raw = flag_value(args, flag)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("Invalid value for {flag}: {raw}");
            process::exit(2);
        }
    }
}
