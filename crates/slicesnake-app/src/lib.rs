//! Headless driver for the slice snake game.
//!
//! A [`Session`] advances a [`FrameClock`], lets the [`Pilot`] choose a command
//! each frame, presses the matching key through the key map, and steps the game.

mod frame_clock;
mod pilot;
mod session;
mod settings;

pub use frame_clock::FrameClock;
pub use pilot::Pilot;
pub use session::{RunSummary, Session};
pub use settings::game_settings;
