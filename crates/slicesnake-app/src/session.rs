//! Headless play session: simulated key presses driving a game frame by frame.

use std::time::Duration;

use slicesnake_game::{FoodPicker, Game, GameOverCause, GameStatus, StepOutcome};
use slicesnake_input::{Command, KeyMap, RawKeyEvent, apply};
use tracing::{debug, info, warn};
use winit::event::ElementState;
use winit::keyboard::PhysicalKey;

use crate::frame_clock::FrameClock;
use crate::pilot::Pilot;

/// Outcome of one run from start to game over (or the tick limit).
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub score: u32,
    pub length: usize,
    pub ticks: u64,
    pub frames: u64,
    /// `None` when the tick limit was reached first.
    pub cause: Option<GameOverCause>,
    pub tick_ms: u64,
    pub sim_time: Duration,
}

/// Owns a game plus everything needed to play it without a window.
pub struct Session<P: FoodPicker> {
    game: Game<P>,
    keys: KeyMap,
    pilot: Pilot,
    clock: FrameClock,
}

impl<P: FoodPicker> Session<P> {
    pub fn new(game: Game<P>, keys: KeyMap, fps: u32) -> Self {
        Self {
            game,
            keys,
            pilot: Pilot::new(),
            clock: FrameClock::new(fps),
        }
    }

    pub fn game(&self) -> &Game<P> {
        &self.game
    }

    /// Press the key bound to `command` and route the result into the game.
    ///
    /// Commands with no bound key are applied directly.
    pub fn press(&mut self, command: Command) -> bool {
        let now = self.clock.now();
        let Some(code) = self.keys.key_for(command) else {
            warn!(?command, "no key bound; applying command directly");
            return apply(command, &mut self.game, now);
        };
        let event = RawKeyEvent {
            key: PhysicalKey::Code(code),
            state: ElementState::Pressed,
            repeat: false,
        };
        match self.keys.translate(event) {
            Some(translated) => apply(translated, &mut self.game, now),
            None => false,
        }
    }

    /// Play one run until game over or until `max_ticks` ticks have run.
    pub fn run(&mut self, max_ticks: u64) -> RunSummary {
        if self.game.status() == GameStatus::Playing {
            self.game.reset_to_menu(self.clock.now());
        }
        let start_frame = self.clock.frames();
        let start_time = self.clock.now();
        self.press(Command::Start);

        let mut ticks = 0;
        let mut cause = None;
        while ticks < max_ticks {
            if self.game.status() != GameStatus::Playing {
                warn!(status = ?self.game.status(), "game is not running; ending run");
                break;
            }
            let now = self.clock.advance();
            if let Some(command) = self.pilot.decide(&self.game.snapshot()) {
                self.press(command);
            }
            match self.game.step(now) {
                StepOutcome::Idle => continue,
                StepOutcome::Moved => {}
                StepOutcome::Ate => {
                    debug!(
                        score = self.game.score(),
                        tick_ms = self.game.tick_interval_ms(),
                        "pilot ate"
                    );
                }
                StepOutcome::GameOver(c) => {
                    ticks += 1;
                    cause = Some(c);
                    break;
                }
            }
            ticks += 1;
        }

        let summary = RunSummary {
            score: self.game.score(),
            length: self.game.snake().len(),
            ticks,
            frames: self.clock.frames() - start_frame,
            cause,
            tick_ms: self.game.tick_interval_ms(),
            sim_time: self.clock.now() - start_time,
        };
        info!(
            score = summary.score,
            length = summary.length,
            ticks = summary.ticks,
            cause = ?summary.cause,
            "run finished"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use slicesnake_game::{GameSettings, SeededPicker};
    use winit::keyboard::KeyCode;

    use super::*;

    fn session(seed: u64) -> Session<SeededPicker> {
        let game = Game::seeded(GameSettings::default(), seed, Duration::ZERO);
        Session::new(game, KeyMap::default(), 60)
    }

    #[test]
    fn test_press_goes_through_key_map() {
        let mut s = session(3);
        assert!(s.press(Command::Start));
        assert_eq!(s.game().status(), GameStatus::Playing);
        assert!(s.press(Command::TogglePause));
        assert!(s.game().paused());
    }

    #[test]
    fn test_unbound_command_still_applies() {
        let mut keys = KeyMap::default();
        keys.bindings.remove(&Command::Start);
        assert_eq!(keys.command_for(KeyCode::Enter), None);
        let game = Game::seeded(GameSettings::default(), 3, Duration::ZERO);
        let mut s = Session::new(game, keys, 60);
        assert!(s.press(Command::Start));
        assert_eq!(s.game().status(), GameStatus::Playing);
    }

    #[test]
    fn test_run_respects_tick_limit() {
        let mut s = session(11);
        let summary = s.run(5);
        assert!(summary.ticks <= 5);
        if summary.cause.is_none() {
            assert_eq!(summary.ticks, 5);
            assert_eq!(s.game().status(), GameStatus::Playing);
        }
        // Five ticks at roughly 360 ms each.
        assert!(summary.sim_time >= Duration::from_millis(1700));
    }

    #[test]
    fn test_length_tracks_score() {
        let mut s = session(42);
        let summary = s.run(400);
        assert_eq!(summary.length, summary.score as usize + 3);
        assert!(summary.score >= 1, "pilot never reached food: {summary:?}");
    }

    #[test]
    fn test_consecutive_runs_restart() {
        let mut s = session(5);
        s.run(3);
        let second = s.run(3);
        assert!(second.ticks <= 3);
        assert!(second.frames > 0);
    }
}
