//! Slice snake: plays the game headlessly with the autopilot and logs each run.
//!
//! Run with: `cargo run -p slicesnake-app -- --seed 7 --runs 3`

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use slicesnake_app::{Session, game_settings};
use slicesnake_config::{CliArgs, Config, ConfigError};
use slicesnake_game::{Game, SeededPicker};
use slicesnake_input::KeyMap;
use tracing::{error, info, warn};

/// CLI arguments for the binary.
#[derive(Parser, Debug)]
#[command(name = "slicesnake", about = "Snake in a cube, played one slice at a time")]
struct AppArgs {
    #[command(flatten)]
    config: CliArgs,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Tick limit per run.
    #[arg(long, default_value_t = 2000)]
    max_ticks: u64,

    /// Number of runs to play.
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Key map file (RON); defaults are used when absent.
    #[arg(long)]
    keys: Option<PathBuf>,
}

fn load_config(args: &CliArgs) -> Result<(Config, PathBuf), ConfigError> {
    let config_dir = match &args.config {
        Some(dir) => dir.clone(),
        None => Config::default_dir()?,
    };
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(args);
    config.validate()?;
    Ok((config, config_dir))
}

fn main() -> ExitCode {
    let args = AppArgs::parse();

    let (config, config_dir) = match load_config(&args.config) {
        Ok(loaded) => loaded,
        Err(e) => {
            slicesnake_log::init_logging(None, false, None);
            error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    slicesnake_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    if args.fps == 0 {
        error!("--fps must be positive");
        return ExitCode::FAILURE;
    }

    let keys = match &args.keys {
        Some(path) => KeyMap::load(path),
        None => KeyMap::default(),
    };
    for conflict in keys.detect_conflicts() {
        warn!(key = ?conflict.key, commands = ?conflict.commands, "key bound to several commands");
    }

    let picker = match config.debug.seed {
        Some(seed) => SeededPicker::new(seed),
        None => SeededPicker::from_entropy(),
    };
    let game = Game::new(game_settings(&config), picker, Duration::ZERO);

    info!("Slice snake");
    info!(
        "Board: {n}x{n}x{n} | Tick: {}ms | Seed: {:?}",
        config.speed.initial_tick_ms,
        config.debug.seed,
        n = config.board.size,
    );

    let mut session = Session::new(game, keys, args.fps);
    let mut best = 0;
    for run in 1..=args.runs {
        let summary = session.run(args.max_ticks);
        info!(
            run,
            score = summary.score,
            ticks = summary.ticks,
            frames = summary.frames,
            tick_ms = summary.tick_ms,
            sim_secs = summary.sim_time.as_secs_f32(),
            "run summary"
        );
        best = best.max(summary.score);
    }
    info!(best, runs = args.runs, "done");

    ExitCode::SUCCESS
}
