//! Keyboard input for the slice snake game.
//!
//! Physical key presses are looked up in a [`KeyMap`] to produce a
//! [`Command`], which [`apply`] routes into a [`Game`](slicesnake_game::Game)
//! subject to the current game status. Key maps persist as RON.

mod command;
mod error;
mod keymap;

pub use command::{Command, ViewStep, apply};
pub use error::KeyMapError;
pub use keymap::{Conflict, KeyBinding, KeyMap, RawKeyEvent};
