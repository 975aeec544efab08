//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use slicesnake_coords::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

use crate::error::ConfigError;

const APP_NAME: &str = "slicesnake";
const CONFIG_FILE: &str = "config.ron";

/// Top-level game configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Board dimensions.
    pub board: BoardConfig,
    /// Tick timing.
    pub speed: SpeedConfig,
    /// Wireframe minimap camera.
    pub minimap: MinimapConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Board configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Edge length N of the N×N×N lattice.
    pub size: u32,
}

/// Tick interval configuration, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpeedConfig {
    /// Interval at the start of every run.
    pub initial_tick_ms: u64,
    /// Fastest allowed interval.
    pub min_tick_ms: u64,
    /// Slowest allowed interval.
    pub max_tick_ms: u64,
    /// Interval reduction per food eaten.
    pub eat_step_ms: u64,
    /// Interval change per speed-up/slow-down key press.
    pub manual_step_ms: u64,
}

/// Minimap rotation angles in radians.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MinimapConfig {
    /// Rotation about the X axis, applied first.
    pub rot_x: f32,
    /// Rotation about the Y axis, applied second.
    pub rot_y: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Fixed food RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

// --- Default implementations ---

impl Default for BoardConfig {
    fn default() -> Self {
        Self { size: 20 }
    }
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            initial_tick_ms: 360,
            min_tick_ms: 80,
            max_tick_ms: 1200,
            eat_step_ms: 1,
            manual_step_ms: 20,
        }
    }
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            rot_x: -0.75,
            rot_y: 0.85,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

// --- Validation ---

impl Config {
    /// Reject values that would make an unplayable or inconsistent game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.size < MIN_BOARD_SIZE {
            return Err(ConfigError::Invalid(format!(
                "board.size {} is below the minimum of {MIN_BOARD_SIZE}",
                self.board.size
            )));
        }
        if self.board.size > MAX_BOARD_SIZE {
            return Err(ConfigError::Invalid(format!(
                "board.size {} is above the maximum of {MAX_BOARD_SIZE}",
                self.board.size
            )));
        }
        let s = &self.speed;
        if s.min_tick_ms == 0 {
            return Err(ConfigError::Invalid("speed.min_tick_ms must be positive".into()));
        }
        if !(s.min_tick_ms <= s.initial_tick_ms && s.initial_tick_ms <= s.max_tick_ms) {
            return Err(ConfigError::Invalid(format!(
                "speed must satisfy min <= initial <= max, got {} / {} / {}",
                s.min_tick_ms, s.initial_tick_ms, s.max_tick_ms
            )));
        }
        if s.eat_step_ms == 0 || s.manual_step_ms == 0 {
            return Err(ConfigError::Invalid("speed steps must be positive".into()));
        }
        if s.eat_step_ms > s.max_tick_ms || s.manual_step_ms > s.max_tick_ms {
            return Err(ConfigError::Invalid(format!(
                "speed steps must not exceed max_tick_ms ({}), got eat {} / manual {}",
                s.max_tick_ms, s.eat_step_ms, s.manual_step_ms
            )));
        }
        if !self.minimap.rot_x.is_finite() || !self.minimap.rot_y.is_finite() {
            return Err(ConfigError::Invalid("minimap angles must be finite".into()));
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Platform config directory for this game (`<os config dir>/slicesnake`).
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|base| base.join(APP_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
