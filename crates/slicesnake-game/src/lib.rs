//! Snake-in-a-cube simulation: one [`Game`] aggregate owning all run state.
//!
//! The game advances in discrete ticks gated by elapsed time. Each tick commits
//! the queued turn (reversals are dropped), moves the head one cell, checks
//! bounds and self-collision, eats and regrows food, and keeps the view aligned
//! with the movement plane.
//!
//! ```rust
//! use std::time::Duration;
//! use slicesnake_game::{Game, GameSettings, StepOutcome};
//!
//! let mut game = Game::seeded(GameSettings::default(), 42, Duration::ZERO);
//! game.start(Duration::ZERO);
//! assert_eq!(game.step(Duration::from_millis(100)), StepOutcome::Idle);
//! assert!(game.step(Duration::from_millis(400)).ticked());
//! ```

mod food;
mod game;
mod rotation;
mod snake;
mod snapshot;
mod state;
mod timer;

pub use food::{FoodPicker, SeededPicker, empty_cells, place_food};
pub use game::{Game, GameSettings};
pub use rotation::{PlaneTurn, turn_plane};
pub use snake::Snake;
pub use snapshot::Snapshot;
pub use state::{GameOverCause, GameStatus, StepOutcome};
pub use timer::{SpeedChange, SpeedSettings, TickTimer};

pub use slicesnake_coords::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
