//! Key bindings: physical keys to [`Command`]s, persisted as RON.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use slicesnake_coords::Arrow;
use tracing::warn;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::command::{Command, ViewStep};
use crate::error::KeyMapError;

/// Serde helper for [`KeyCode`], which has no serde support of its own.
mod keycode_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use winit::keyboard::KeyCode;

    /// Serialize a [`KeyCode`] as its debug name (e.g. `"ArrowUp"`).
    pub fn serialize<S: Serializer>(code: &KeyCode, s: S) -> Result<S::Ok, S::Error> {
        format!("{code:?}").serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<KeyCode, D::Error> {
        let name = String::deserialize(d)?;
        string_to_keycode(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown key: {name}")))
    }

    fn string_to_keycode(s: &str) -> Option<KeyCode> {
        Some(match s {
            "KeyA" => KeyCode::KeyA,
            "KeyB" => KeyCode::KeyB,
            "KeyC" => KeyCode::KeyC,
            "KeyD" => KeyCode::KeyD,
            "KeyE" => KeyCode::KeyE,
            "KeyF" => KeyCode::KeyF,
            "KeyG" => KeyCode::KeyG,
            "KeyH" => KeyCode::KeyH,
            "KeyI" => KeyCode::KeyI,
            "KeyJ" => KeyCode::KeyJ,
            "KeyK" => KeyCode::KeyK,
            "KeyL" => KeyCode::KeyL,
            "KeyM" => KeyCode::KeyM,
            "KeyN" => KeyCode::KeyN,
            "KeyO" => KeyCode::KeyO,
            "KeyP" => KeyCode::KeyP,
            "KeyQ" => KeyCode::KeyQ,
            "KeyR" => KeyCode::KeyR,
            "KeyS" => KeyCode::KeyS,
            "KeyT" => KeyCode::KeyT,
            "KeyU" => KeyCode::KeyU,
            "KeyV" => KeyCode::KeyV,
            "KeyW" => KeyCode::KeyW,
            "KeyX" => KeyCode::KeyX,
            "KeyY" => KeyCode::KeyY,
            "KeyZ" => KeyCode::KeyZ,
            "Digit0" => KeyCode::Digit0,
            "Digit1" => KeyCode::Digit1,
            "Digit2" => KeyCode::Digit2,
            "Digit3" => KeyCode::Digit3,
            "Digit4" => KeyCode::Digit4,
            "Digit5" => KeyCode::Digit5,
            "Digit6" => KeyCode::Digit6,
            "Digit7" => KeyCode::Digit7,
            "Digit8" => KeyCode::Digit8,
            "Digit9" => KeyCode::Digit9,
            "Space" => KeyCode::Space,
            "Enter" => KeyCode::Enter,
            "NumpadEnter" => KeyCode::NumpadEnter,
            "Escape" => KeyCode::Escape,
            "Tab" => KeyCode::Tab,
            "Backspace" => KeyCode::Backspace,
            "Equal" => KeyCode::Equal,
            "Minus" => KeyCode::Minus,
            "NumpadAdd" => KeyCode::NumpadAdd,
            "NumpadSubtract" => KeyCode::NumpadSubtract,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            _ => return None,
        })
    }
}

/// A bindable physical key.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBinding(#[serde(with = "keycode_serde")] pub KeyCode);

/// Minimal description of a key event, constructible without a window.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    pub key: PhysicalKey,
    pub state: ElementState,
    pub repeat: bool,
}

impl From<&KeyEvent> for RawKeyEvent {
    fn from(event: &KeyEvent) -> Self {
        Self {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        }
    }
}

/// The same key bound to more than one command.
#[derive(Debug, Clone)]
pub struct Conflict {
    pub key: KeyBinding,
    pub commands: Vec<Command>,
}

/// Maps each [`Command`] to the keys that trigger it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyMap {
    pub bindings: HashMap<Command, Vec<KeyBinding>>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let table: [(Command, &[KeyCode]); 11] = [
            (Command::Steer(Arrow::Left), &[KeyCode::ArrowLeft]),
            (Command::Steer(Arrow::Right), &[KeyCode::ArrowRight]),
            (Command::Steer(Arrow::Up), &[KeyCode::ArrowUp]),
            (Command::Steer(Arrow::Down), &[KeyCode::ArrowDown]),
            (Command::RotatePlane, &[KeyCode::KeyW]),
            (Command::CycleView(ViewStep::Prev), &[KeyCode::KeyQ]),
            (Command::CycleView(ViewStep::Next), &[KeyCode::KeyE]),
            (Command::TogglePause, &[KeyCode::Space]),
            (Command::Start, &[KeyCode::Enter, KeyCode::NumpadEnter]),
            (Command::SpeedUp, &[KeyCode::Equal, KeyCode::NumpadAdd]),
            (Command::SlowDown, &[KeyCode::Minus, KeyCode::NumpadSubtract]),
        ];

        let bindings = table
            .into_iter()
            .map(|(command, keys)| (command, keys.iter().copied().map(KeyBinding).collect()))
            .collect();
        Self { bindings }
    }
}

impl KeyMap {
    /// The command bound to `code`, if any.
    ///
    /// When the key is bound to several commands, the one declared first in
    /// [`Command`] wins.
    #[must_use]
    pub fn command_for(&self, code: KeyCode) -> Option<Command> {
        self.bindings
            .iter()
            .filter(|(_, keys)| keys.contains(&KeyBinding(code)))
            .map(|(command, _)| *command)
            .min()
    }

    /// First key bound to `command`, if any.
    #[must_use]
    pub fn key_for(&self, command: Command) -> Option<KeyCode> {
        self.bindings
            .get(&command)
            .and_then(|keys| keys.first())
            .map(|key| key.0)
    }

    /// Translate a key event. Releases, repeats and unbound keys yield `None`.
    #[must_use]
    pub fn translate(&self, event: RawKeyEvent) -> Option<Command> {
        if event.repeat || event.state != ElementState::Pressed {
            return None;
        }
        match event.key {
            PhysicalKey::Code(code) => self.command_for(code),
            PhysicalKey::Unidentified(_) => None,
        }
    }

    /// Translate a winit [`KeyEvent`].
    #[must_use]
    pub fn translate_event(&self, event: &KeyEvent) -> Option<Command> {
        self.translate(RawKeyEvent::from(event))
    }

    /// Keys that appear under more than one command.
    #[must_use]
    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        let mut seen: HashMap<KeyBinding, Vec<Command>> = HashMap::new();
        for (command, keys) in &self.bindings {
            for key in keys {
                seen.entry(*key).or_default().push(*command);
            }
        }
        seen.into_iter()
            .filter(|(_, commands)| commands.len() > 1)
            .map(|(key, mut commands)| {
                commands.sort();
                Conflict { key, commands }
            })
            .collect()
    }

    pub fn to_ron(&self) -> Result<String, KeyMapError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn from_ron(s: &str) -> Result<Self, KeyMapError> {
        Ok(ron::from_str(s)?)
    }

    /// Write the key map to `path` as RON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), KeyMapError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Load a key map from `path`, falling back to the defaults (with a
    /// warning) when the file is missing or malformed.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_ron(&contents) {
                Ok(map) => map,
                Err(e) => {
                    warn!("Malformed key map {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read key map {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Platform path for `keys.ron`.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("slicesnake").join("keys.ron"))
    }
}
