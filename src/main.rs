//! Doodle Jump headless runner
//!
//! Plays a few runs with the idle autopilot standing in for a player and
//! logs them. Environment:
//! - `RUST_LOG`: log level (`debug` shows periodic frame summaries)
//! - `DOODLE_SEED`: run seed (defaults to the current time)
//! - `DOODLE_SETTINGS`: path to a JSON settings file
//! - `DOODLE_RUNS`: number of runs to play (default 3)

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use doodle_jump::sim::{Intent, idle_intent};
use doodle_jump::{Director, FrameOutcome, LogRenderer, Settings};

/// Stop a run that the autopilot keeps alive for too long
const MAX_FRAMES_PER_RUN: u64 = 100_000;
/// Log a frame summary this often (at debug level)
const LOG_INTERVAL: u64 = 600;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Doodle Jump (headless) starting...");

    let settings = load_settings()?;
    let seed = match std::env::var("DOODLE_SEED") {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("DOODLE_SEED is not a number: {raw:?}"))?,
        Err(_) => time_seed(),
    };
    let runs = match std::env::var("DOODLE_RUNS") {
        Ok(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("DOODLE_RUNS is not a number: {raw:?}"))?,
        Err(_) => 3,
    };

    let mut director = Director::new(settings, seed)?;
    let mut renderer = LogRenderer::new(LOG_INTERVAL);

    for run in 1..=runs {
        let mut frames = 0;
        while frames < MAX_FRAMES_PER_RUN {
            let intent = idle_intent(director.state());
            director.handle(intent);
            frames += 1;
            if director.frame(&mut renderer) == FrameOutcome::Stopped {
                break;
            }
        }

        if director.state().is_running() {
            log::warn!(
                "Run {} still alive after {} frames (score {}), abandoning",
                run,
                frames,
                director.state().score
            );
            break;
        }

        log::info!(
            "Run {}/{}: score {}, best {}",
            run,
            runs,
            director.state().score,
            director.high_score()
        );
        if run < runs {
            director.handle(Intent::Restart);
        }
    }

    log::info!("Best score this session: {}", director.high_score());
    Ok(())
}

fn load_settings() -> Result<Settings> {
    let Ok(path) = std::env::var("DOODLE_SETTINGS") else {
        log::info!("Using default settings");
        return Ok(Settings::default());
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read settings from {path}"))?;
    Settings::from_json(&json).with_context(|| format!("invalid settings in {path}"))
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
