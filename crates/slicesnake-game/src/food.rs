//! Food placement: enumerate empty cells and let a picker choose one.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use slicesnake_coords::{Cell, all_cells};

use crate::snake::Snake;

/// Chooses one cell uniformly from a non-empty candidate set.
///
/// The game owns the picker so tests can substitute a deterministic one.
pub trait FoodPicker {
    /// Return an index into `candidates`. `candidates` is never empty.
    fn pick(&mut self, candidates: &[Cell]) -> usize;
}

/// Uniform picker backed by a seeded ChaCha8 stream.
///
/// The same seed yields the same food sequence for the same moves.
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: ChaCha8Rng,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }
}

impl FoodPicker for SeededPicker {
    fn pick(&mut self, candidates: &[Cell]) -> usize {
        self.rng.random_range(0..candidates.len())
    }
}

impl<F: FnMut(&[Cell]) -> usize> FoodPicker for F {
    fn pick(&mut self, candidates: &[Cell]) -> usize {
        self(candidates)
    }
}

/// Every board cell not covered by the snake, in board order.
pub fn empty_cells(board_size: u32, snake: &Snake) -> Vec<Cell> {
    all_cells(board_size).filter(|c| !snake.contains(*c)).collect()
}

/// Pick a food cell among the empty ones, or `None` if the board is full.
pub fn place_food(board_size: u32, snake: &Snake, picker: &mut impl FoodPicker) -> Option<Cell> {
    let empties = empty_cells(board_size, snake);
    if empties.is_empty() {
        return None;
    }
    let idx = picker.pick(&empties).min(empties.len() - 1);
    Some(empties[idx])
}
