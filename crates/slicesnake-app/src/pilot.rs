//! Greedy food-seeking autopilot.
//!
//! Each frame the pilot looks at a [`Snapshot`] and picks the arrow that moves
//! the head closest to the food without leaving the board or hitting the body.
//! When the food sits on another slice and no in-plane move gets closer, it
//! rotates the plane so the missing axis becomes steerable.

use slicesnake_coords::{Arrow, Cell, Direction, arrow_to_world};
use slicesnake_game::{GameStatus, Snapshot};
use slicesnake_input::Command;

const ARROWS: [Arrow; 4] = [Arrow::Left, Arrow::Right, Arrow::Up, Arrow::Down];

#[derive(Debug, Default)]
pub struct Pilot {
    /// Head position at the last rotation; at most one rotation per cell.
    rotated_at: Option<Cell>,
}

impl Pilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The command to issue this frame, if any.
    pub fn decide(&mut self, snap: &Snapshot) -> Option<Command> {
        if snap.status != GameStatus::Playing || snap.paused {
            return None;
        }
        let head = snap.head();

        let options: Vec<(Arrow, Direction)> = ARROWS
            .iter()
            .map(|&arrow| (arrow, arrow_to_world(arrow, &snap.info)))
            .filter(|(_, dir)| !dir.is_reverse_of(snap.direction))
            .collect();

        let closer = options.iter().any(|(_, dir)| gain(head, snap.food, *dir) > 0);
        if !closer && !snap.food_on_slice() && self.rotated_at != Some(head) {
            self.rotated_at = Some(head);
            return Some(Command::RotatePlane);
        }

        let (arrow, dir) = options
            .into_iter()
            .filter(|(_, dir)| is_safe(snap, *dir))
            .max_by_key(|(_, dir)| (gain(head, snap.food, *dir), *dir == snap.direction))?;

        (dir != snap.direction).then_some(Command::Steer(arrow))
    }
}

/// Reduction in distance to `food` along `dir`'s axis from one step.
fn gain(head: Cell, food: Cell, dir: Direction) -> i32 {
    (food.get(dir.axis) - head.get(dir.axis)) * dir.step.as_i32()
}

fn is_safe(snap: &Snapshot, dir: Direction) -> bool {
    let next = snap.head().step(dir);
    next.in_bounds(snap.info.size) && !snap.snake.contains(&next)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use slicesnake_coords::{Axis, Sign};
    use slicesnake_game::{Game, GameSettings};
    use slicesnake_input::apply;

    use super::*;

    fn game_with_food(food: Cell) -> Game<impl FnMut(&[Cell]) -> usize> {
        let picker = move |cells: &[Cell]| cells.iter().position(|&c| c == food).unwrap_or(0);
        let mut game = Game::new(GameSettings::default(), picker, Duration::ZERO);
        game.start(Duration::ZERO);
        game
    }

    #[test]
    fn test_idle_outside_play() {
        let game = Game::seeded(GameSettings::default(), 1, Duration::ZERO);
        assert_eq!(Pilot::new().decide(&game.snapshot()), None);
    }

    #[test]
    fn test_keeps_heading_when_food_ahead() {
        let game = game_with_food(Cell::new(15, 10, 10));
        assert_eq!(Pilot::new().decide(&game.snapshot()), None);
    }

    #[test]
    fn test_turns_towards_food_on_slice() {
        let game = game_with_food(Cell::new(10, 14, 10));
        assert_eq!(
            Pilot::new().decide(&game.snapshot()),
            Some(Command::Steer(Arrow::Down))
        );
    }

    #[test]
    fn test_rotates_once_for_food_off_slice() {
        let mut game = game_with_food(Cell::new(10, 10, 15));
        let mut pilot = Pilot::new();
        assert_eq!(pilot.decide(&game.snapshot()), Some(Command::RotatePlane));
        apply(Command::RotatePlane, &mut game, Duration::ZERO);

        let snap = game.snapshot();
        assert!(snap.food_on_slice());
        let Some(Command::Steer(arrow)) = pilot.decide(&snap) else {
            panic!("expected a steering command after rotation");
        };
        apply(Command::Steer(arrow), &mut game, Duration::ZERO);
        assert_eq!(game.pending_direction(), Direction::new(Axis::Z, Sign::Pos));
    }

    #[test]
    fn test_reaches_food_in_a_corner() {
        let mut game = game_with_food(Cell::new(0, 0, 0));
        let mut pilot = Pilot::new();
        for _ in 0..60 {
            // A frame may need a rotation followed by a turn.
            for _ in 0..2 {
                match pilot.decide(&game.snapshot()) {
                    Some(cmd) => apply(cmd, &mut game, Duration::ZERO),
                    None => break,
                };
            }
            let snap = game.snapshot();
            let next = snap.head().step(game.pending_direction());
            assert!(next.in_bounds(snap.info.size), "pilot steered towards a wall");
            game.advance();
            if game.score() >= 1 {
                break;
            }
        }
        assert_eq!(game.score(), 1);
        assert_eq!(game.snake().head(), Cell::new(0, 0, 0));
    }
}
