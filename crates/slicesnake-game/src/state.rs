//! Game status and per-step outcomes.

/// Top-level game phase. Pausing is tracked separately and only matters in `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// The head would have left the board.
    OutOfBounds,
    /// The head would have entered a body cell.
    SelfCollision,
    /// Food was eaten and no empty cell remained for the next one.
    BoardFull,
}

/// What a call to `step` or `advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No tick ran (not playing, paused, or interval not yet elapsed).
    Idle,
    /// The snake moved one cell.
    Moved,
    /// The snake moved onto food.
    Ate,
    /// The tick ended the run.
    GameOver(GameOverCause),
}

impl StepOutcome {
    /// True if a tick actually ran.
    pub fn ticked(self) -> bool {
        self != StepOutcome::Idle
    }
}
