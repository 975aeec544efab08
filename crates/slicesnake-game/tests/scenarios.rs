//! End-to-end runs through the public game API.

use std::collections::VecDeque;
use std::time::Duration;

use slicesnake_coords::{Arrow, Axis, Cell, Direction, PlaneAxes, Sign, View};
use slicesnake_game::{
    FoodPicker, Game, GameOverCause, GameSettings, GameStatus, SpeedSettings, StepOutcome,
};

/// Places food on queued target cells in order, then falls back to the first empty cell.
struct ScriptedPicker {
    targets: VecDeque<Cell>,
}

impl ScriptedPicker {
    fn new(targets: &[Cell]) -> Self {
        Self {
            targets: targets.iter().copied().collect(),
        }
    }
}

impl FoodPicker for ScriptedPicker {
    fn pick(&mut self, candidates: &[Cell]) -> usize {
        let Some(target) = self.targets.pop_front() else {
            return 0;
        };
        candidates
            .iter()
            .position(|&c| c == target)
            .expect("scripted food target must be empty")
    }
}

fn started(targets: &[Cell]) -> Game<ScriptedPicker> {
    let mut game = Game::new(
        GameSettings::default(),
        ScriptedPicker::new(targets),
        Duration::ZERO,
    );
    assert!(game.start(Duration::ZERO));
    game
}

fn body(game: &Game<ScriptedPicker>) -> Vec<Cell> {
    game.snake().cells().collect()
}

#[test]
fn plain_step_moves_head_and_pops_tail() {
    // Menu reset consumes one target, start consumes the next.
    let mut game = started(&[Cell::new(0, 0, 0), Cell::new(0, 0, 0)]);
    assert_eq!(
        body(&game),
        vec![
            Cell::new(10, 10, 10),
            Cell::new(9, 10, 10),
            Cell::new(8, 10, 10)
        ]
    );
    assert_eq!(game.direction(), Direction::new(Axis::X, Sign::Pos));

    assert_eq!(game.advance(), StepOutcome::Moved);
    assert_eq!(
        body(&game),
        vec![
            Cell::new(11, 10, 10),
            Cell::new(10, 10, 10),
            Cell::new(9, 10, 10)
        ]
    );
    assert_eq!(game.score(), 0);
}

#[test]
fn eating_grows_speeds_up_and_replaces_food() {
    let mut game = started(&[
        Cell::new(0, 0, 0),
        Cell::new(11, 10, 10),
        Cell::new(3, 3, 3),
    ]);
    assert_eq!(game.food(), Cell::new(11, 10, 10));

    assert_eq!(game.advance(), StepOutcome::Ate);
    assert_eq!(game.score(), 1);
    assert_eq!(game.snake().len(), 4);
    assert_eq!(game.snake().tail(), Cell::new(8, 10, 10));
    assert_eq!(game.tick_interval_ms(), 359);
    assert_eq!(game.food(), Cell::new(3, 3, 3));
    assert!(!game.snake().contains(game.food()));

    // Growth happened on the eating tick; the next tick moves at constant length.
    assert_eq!(game.advance(), StepOutcome::Moved);
    assert_eq!(game.snake().len(), 4);
}

#[test]
fn eating_at_min_interval_stays_clamped() {
    let settings = GameSettings {
        speed: SpeedSettings {
            initial_ms: 80,
            ..SpeedSettings::default()
        },
        ..GameSettings::default()
    };
    let mut game = Game::new(
        settings,
        ScriptedPicker::new(&[Cell::new(0, 0, 0), Cell::new(11, 10, 10)]),
        Duration::ZERO,
    );
    game.start(Duration::ZERO);
    assert_eq!(game.advance(), StepOutcome::Ate);
    assert_eq!(game.tick_interval_ms(), 80);
}

#[test]
fn running_off_the_board_ends_the_game_without_moving() {
    let mut game = started(&[Cell::new(0, 0, 0), Cell::new(0, 0, 0)]);
    for _ in 0..9 {
        assert_eq!(game.advance(), StepOutcome::Moved);
    }
    assert_eq!(game.snake().head(), Cell::new(19, 10, 10));
    let before = body(&game);

    assert_eq!(
        game.advance(),
        StepOutcome::GameOver(GameOverCause::OutOfBounds)
    );
    assert_eq!(game.status(), GameStatus::GameOver);
    assert_eq!(game.game_over_cause(), Some(GameOverCause::OutOfBounds));
    assert_eq!(body(&game), before);

    // Further steps do nothing until restarted.
    assert_eq!(game.advance(), StepOutcome::Idle);
    assert!(game.start(Duration::from_secs(5)));
    assert_eq!(game.snake().head(), Cell::new(10, 10, 10));
}

#[test]
fn steering_into_own_body_is_a_collision() {
    // Eat twice to reach length 5, then loop back onto the body.
    let mut game = started(&[
        Cell::new(0, 0, 0),
        Cell::new(11, 10, 10),
        Cell::new(12, 10, 10),
        Cell::new(0, 0, 0),
    ]);
    assert_eq!(game.advance(), StepOutcome::Ate);
    assert_eq!(game.advance(), StepOutcome::Ate);
    assert_eq!(game.snake().len(), 5);

    assert!(game.request_arrow(Arrow::Down));
    assert_eq!(game.advance(), StepOutcome::Moved);
    assert!(game.request_arrow(Arrow::Left));
    assert_eq!(game.advance(), StepOutcome::Moved);
    assert!(game.request_arrow(Arrow::Up));
    assert_eq!(
        game.advance(),
        StepOutcome::GameOver(GameOverCause::SelfCollision)
    );
}

#[test]
fn rotating_about_b_swaps_a_for_old_normal() {
    let mut game = started(&[Cell::new(0, 0, 0), Cell::new(0, 0, 0)]);
    assert!(game.request_arrow(Arrow::Down));
    game.advance();
    assert_eq!(game.direction().axis, Axis::Y);

    let before = game.plane();
    assert!(game.rotate_plane());
    let after = game.plane();
    assert_eq!(after.a(), before.normal());
    assert_eq!(after.b(), before.b());
    assert_eq!(after.normal(), before.a());
    assert_eq!(game.view(), View::new(Axis::X, Sign::Pos));

    // The snake keeps heading +Y and can now steer along Z.
    assert!(game.request_arrow(Arrow::Right));
    game.advance();
    assert_eq!(game.direction(), Direction::new(Axis::Z, Sign::Pos));
    assert_eq!(game.snake().head(), Cell::new(10, 11, 11));
}

#[test]
fn rotating_twice_returns_to_original_plane() {
    let mut game = started(&[Cell::new(0, 0, 0), Cell::new(0, 0, 0)]);
    game.rotate_plane();
    assert_eq!(game.plane(), PlaneAxes::new(Axis::X, Axis::Z));
    game.rotate_plane();
    assert_eq!(game.plane(), PlaneAxes::new(Axis::X, Axis::Y));
    assert!(game.plane().contains(game.direction().axis));
}

#[test]
fn time_gate_drives_ticks() {
    let mut game = started(&[Cell::new(0, 0, 0), Cell::new(0, 0, 0)]);
    let mut ticks = 0;
    for frame in 0..=120u64 {
        // 60 fps for two seconds.
        if game.step(Duration::from_micros(frame * 16_667)).ticked() {
            ticks += 1;
        }
    }
    assert_eq!(ticks, 5);
    assert_eq!(game.snake().head(), Cell::new(15, 10, 10));
}
