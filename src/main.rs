//! Brickfall headless driver
//!
//! Stands in for the browser frame loop: builds a session, lets the
//! autopilot play at a fixed cadence and logs what happens.
//!
//! Usage: `brickfall [tuning.json] [seed]` (log level via `RUST_LOG`)

use brickfall::Tuning;
use brickfall::sim::{GameEvent, GameSession, autopilot};

/// 60 Hz display
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Ten minutes of play
const MAX_FRAMES: u64 = 60 * 60 * 10;
const DEFAULT_SEED: u64 = 0x00b1_0c4f;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brickfall (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Failed to load tuning from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed: {e}");
            std::process::exit(1);
        }
        None => DEFAULT_SEED,
    };

    let mut session = match GameSession::with_tuning(tuning, seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    session.reset_and_start();

    while session.is_running() && session.frame() < MAX_FRAMES {
        let input = autopilot(&session);
        for event in session.step(&input, FRAME_MS) {
            report(&event);
        }
    }

    if session.is_running() {
        log::warn!("Frame budget exhausted after {} frames", session.frame());
    }

    match serde_json::to_string(&session.snapshot()) {
        Ok(json) => log::debug!("Final snapshot: {json}"),
        Err(e) => log::warn!("Could not serialize snapshot: {e}"),
    }

    println!(
        "{:?}: score {} | level {} | lives {} | {} frames ({:.1}s)",
        session.phase(),
        session.score(),
        session.level(),
        session.lives(),
        session.frame(),
        session.elapsed_ms() / 1000.0
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds embed the library; there is no headless driver
}

#[cfg(not(target_arch = "wasm32"))]
fn report(event: &GameEvent) {
    match event.banner() {
        Some(text) => log::info!("{text}"),
        None => log::trace!("{event:?}"),
    }
}
