//! Mapping from persisted configuration to game settings.

use slicesnake_config::Config;
use slicesnake_coords::MinimapRotation;
use slicesnake_game::{GameSettings, SpeedSettings};

/// Game settings described by a (validated) config.
pub fn game_settings(config: &Config) -> GameSettings {
    GameSettings {
        board_size: config.board.size,
        speed: SpeedSettings {
            initial_ms: config.speed.initial_tick_ms,
            min_ms: config.speed.min_tick_ms,
            max_ms: config.speed.max_tick_ms,
            eat_step_ms: config.speed.eat_step_ms,
            manual_step_ms: config.speed.manual_step_ms,
        },
        minimap: MinimapRotation {
            rot_x: config.minimap.rot_x,
            rot_y: config.minimap.rot_y,
        },
    }
}
