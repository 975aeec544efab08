//! Game commands and their routing into the core.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use slicesnake_coords::Arrow;
use slicesnake_game::{FoodPicker, Game, GameStatus, SpeedChange};
use tracing::trace;

/// Direction to step through the view list.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum ViewStep {
    Prev,
    Next,
}

impl ViewStep {
    pub fn offset(self) -> i32 {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}

/// What a key press asks the game to do.
///
/// Ordered by declaration; a key bound to several commands resolves to the
/// smallest one.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Command {
    /// Turn the snake using screen-relative arrows.
    Steer(Arrow),
    /// Rotate the movement plane about the direction of travel.
    RotatePlane,
    /// Step to the previous or next view.
    CycleView(ViewStep),
    /// Pause or resume a running game.
    TogglePause,
    /// Start from the menu or restart after game over.
    Start,
    /// Shorten the tick interval.
    SpeedUp,
    /// Lengthen the tick interval.
    SlowDown,
}

/// Route `command` into `game`, returning whether it had an effect.
///
/// Start works only from the menu or after game over; pause, steering and
/// plane rotation only while playing. View cycling and speed changes are
/// accepted in every status.
pub fn apply<P: FoodPicker>(command: Command, game: &mut Game<P>, now: Duration) -> bool {
    let playing = game.status() == GameStatus::Playing;
    let applied = match command {
        Command::Start => !playing && game.start(now),
        Command::TogglePause => playing && game.toggle_pause(),
        Command::Steer(arrow) => playing && game.request_arrow(arrow),
        Command::RotatePlane => playing && game.rotate_plane(),
        Command::CycleView(step) => {
            game.cycle_view(step.offset());
            true
        }
        Command::SpeedUp => {
            game.adjust_speed(SpeedChange::Faster);
            true
        }
        Command::SlowDown => {
            game.adjust_speed(SpeedChange::Slower);
            true
        }
    };
    trace!(?command, applied, "command");
    applied
}
