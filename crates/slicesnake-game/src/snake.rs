//! The snake body: an ordered run of lattice cells, head first.

use std::collections::VecDeque;

use slicesnake_coords::Cell;

/// Snake body cells, most recently entered first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Build a snake from explicit cells, head first.
    ///
    /// # Panics
    ///
    /// Panics on an empty body.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!body.is_empty(), "snake body cannot be empty");
        Self { body }
    }

    /// Three cells centred on the board, heading +X.
    pub fn spawn(board_size: u32) -> Self {
        let c = (board_size / 2) as i32;
        Self::from_cells([
            Cell::new(c, c, c),
            Cell::new(c - 1, c, c),
            Cell::new(c - 2, c, c),
        ])
    }

    pub fn head(&self) -> Cell {
        // Non-empty by construction; growth only adds and the tail is only
        // popped after a new head was pushed.
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Cells from head to tail.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + DoubleEndedIterator + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }
}
