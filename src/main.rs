//! Brick Dash headless driver
//!
//! Runs the simulation in demo mode without a window:
//! `brick-dash [config.json] [ticks]`

use std::path::Path;

use brick_dash::Config;
use brick_dash::sim::{RunState, TickEvent, TickInput, tick};
use brick_dash::view::{Snapshot, high_score_label, score_label};

/// Ticks to simulate when none are given (one minute at 60 Hz)
const DEFAULT_TICKS: u64 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Brick Dash (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::load(Path::new(&path)),
        None => Config::default(),
    };
    let ticks = match args.next().map(|t| t.parse::<u64>()) {
        Some(Ok(ticks)) => ticks,
        Some(Err(e)) => {
            log::warn!("Invalid tick count ({}), using {}", e, DEFAULT_TICKS);
            DEFAULT_TICKS
        }
        None => DEFAULT_TICKS,
    };

    log::info!("Game initialized with seed: {}", config.seed);
    let mut state = RunState::new(&config);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut cleared = 0u64;
    for _ in 0..ticks {
        match tick(&mut state, &input, &config) {
            TickEvent::Advanced { cleared: n, .. } => cleared += n as u64,
            TickEvent::Reset | TickEvent::Paused => {}
        }
    }

    log::info!(
        "Simulated {} ticks: {} runs ended, {} obstacles cleared",
        state.time_ticks,
        state.runs,
        cleared
    );
    println!("{}  {}", score_label(state.score()), high_score_label(state.high_score()));

    let snapshot = Snapshot::capture(&state, &config.player);
    match snapshot.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}
