//! Read-only view of the game for renderers and HUDs.

use slicesnake_coords::{Cell, Direction, PlaneAxes, PlaneInfo, SliceOffset, View, slice_offset};

use crate::state::{GameOverCause, GameStatus};

/// Owned copy of the drawable state, taken after a step completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub status: GameStatus,
    pub paused: bool,
    pub cause: Option<GameOverCause>,
    pub score: u32,
    pub tick_ms: u64,
    pub plane: PlaneAxes,
    pub view: View,
    pub info: PlaneInfo,
    /// Head first.
    pub snake: Vec<Cell>,
    pub direction: Direction,
    pub food: Cell,
}

impl Snapshot {
    /// One-word status for the HUD.
    pub fn status_label(&self) -> &'static str {
        match self.status {
            GameStatus::Menu => "MENU",
            GameStatus::GameOver => "GAME OVER",
            GameStatus::Playing if self.paused => "PAUSED",
            GameStatus::Playing => "RUNNING",
        }
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    /// Whether the food is visible on the current slice.
    pub fn food_on_slice(&self) -> bool {
        self.info.on_slice(self.food)
    }

    /// Head-to-food offset in slice-screen terms, for off-slice hints.
    pub fn food_offset(&self) -> SliceOffset {
        slice_offset(self.head(), self.food, &self.info)
    }

    /// Body cells on the current slice, with their index from the head.
    pub fn cells_on_slice(&self) -> impl Iterator<Item = (usize, Cell)> + '_ {
        self.snake
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, c)| self.info.on_slice(*c))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use slicesnake_coords::Axis;

    use crate::game::{Game, GameSettings};

    #[test]
    fn test_status_labels() {
        let mut g = Game::seeded(GameSettings::default(), 9, Duration::ZERO);
        assert_eq!(g.snapshot().status_label(), "MENU");
        g.start(Duration::ZERO);
        g.toggle_pause();
        assert_eq!(g.snapshot().status_label(), "PAUSED");
    }

    #[test]
    fn test_cells_on_slice_follow_rotation() {
        let mut g = Game::seeded(GameSettings::default(), 9, Duration::ZERO);
        g.start(Duration::ZERO);
        let snap = g.snapshot();
        assert_eq!(snap.cells_on_slice().count(), 3);

        g.rotate_plane();
        let snap = g.snapshot();
        assert_eq!(snap.info.normal, Axis::Y);
        assert_eq!(snap.cells_on_slice().count(), 3);
        assert_eq!(snap.food_on_slice(), snap.food.y == 10);
    }
}
