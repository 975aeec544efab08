//! Command-line argument parsing for the slice snake game.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "slicesnake", about = "Snake in a cube, played one slice at a time")]
pub struct CliArgs {
    /// Board edge length.
    #[arg(long)]
    pub size: Option<u32>,

    /// Initial tick interval in milliseconds.
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Fixed seed for food placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(size) = args.size {
            self.board.size = size;
        }
        if let Some(ms) = args.tick_ms {
            self.speed.initial_tick_ms = ms;
        }
        if let Some(seed) = args.seed {
            self.debug.seed = Some(seed);
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
