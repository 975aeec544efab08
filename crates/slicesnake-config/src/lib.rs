//! Configuration for the slice snake game.
//!
//! Settings persist to disk as RON, missing fields fall back to defaults, and
//! CLI flags override whatever was loaded. [`Config::validate`] rejects values
//! the game core would refuse.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{BoardConfig, Config, DebugConfig, MinimapConfig, SpeedConfig};
pub use error::ConfigError;
pub use slicesnake_coords::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
