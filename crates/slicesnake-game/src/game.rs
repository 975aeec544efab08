//! The game aggregate: one owner for snake, food, plane, view, and timing.
//!
//! Every mutating operation finishes with [`Game::sync_view_to_plane`], so the
//! view's axis always equals the live plane normal between calls.

use std::time::Duration;

use glam::{Vec2, Vec3};
use slicesnake_coords::{
    Arrow, Axis, Cell, Direction, MAX_BOARD_SIZE, MIN_BOARD_SIZE, MinimapRotation, PlaneAxes,
    PlaneInfo, ScreenPoint, Sign, View, arrow_to_world, cell_to_slice, project_to_screen,
};
use tracing::{debug, info, warn};

use crate::food::{FoodPicker, SeededPicker, place_food};
use crate::rotation::turn_plane;
use crate::snake::Snake;
use crate::snapshot::Snapshot;
use crate::state::{GameOverCause, GameStatus, StepOutcome};
use crate::timer::{SpeedChange, SpeedSettings, TickTimer};

/// Fixed parameters of a game, supplied at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSettings {
    /// Board edge length N.
    pub board_size: u32,
    pub speed: SpeedSettings,
    pub minimap: MinimapRotation,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: 20,
            speed: SpeedSettings::default(),
            minimap: MinimapRotation::default(),
        }
    }
}

const START_DIRECTION: Direction = Direction::new(Axis::X, Sign::Pos);

/// A single snake game on an N×N×N board.
pub struct Game<P: FoodPicker = SeededPicker> {
    settings: GameSettings,
    picker: P,
    status: GameStatus,
    paused: bool,
    cause: Option<GameOverCause>,
    snake: Snake,
    food: Cell,
    score: u32,
    direction: Direction,
    pending: Direction,
    plane: PlaneAxes,
    view: View,
    pending_growth: u32,
    timer: TickTimer,
}

impl<P: FoodPicker> Game<P> {
    /// Create a game sitting in the menu, with a freshly reset board.
    ///
    /// # Panics
    ///
    /// Panics if `settings.board_size` is outside
    /// [`MIN_BOARD_SIZE`]`..=`[`MAX_BOARD_SIZE`].
    pub fn new(settings: GameSettings, picker: P, now: Duration) -> Self {
        let mut game = Self {
            settings,
            picker,
            status: GameStatus::Menu,
            paused: false,
            cause: None,
            snake: Snake::spawn(MIN_BOARD_SIZE),
            food: Cell::default(),
            score: 0,
            direction: START_DIRECTION,
            pending: START_DIRECTION,
            plane: PlaneAxes::default(),
            view: View::default(),
            pending_growth: 0,
            timer: TickTimer::new(settings.speed, now),
        };
        game.reset(settings.board_size, now);
        game
    }

    /// Reinitialize snake, food, plane, direction, view, score, and timing.
    ///
    /// Leaves the status alone; see [`start`](Self::start) and
    /// [`reset_to_menu`](Self::reset_to_menu).
    ///
    /// # Panics
    ///
    /// Panics if `board_size` is outside [`MIN_BOARD_SIZE`]`..=`[`MAX_BOARD_SIZE`].
    pub fn reset(&mut self, board_size: u32, now: Duration) {
        assert!(
            board_size >= MIN_BOARD_SIZE,
            "board size {board_size} is below the minimum of {MIN_BOARD_SIZE}"
        );
        assert!(
            board_size <= MAX_BOARD_SIZE,
            "board size {board_size} is above the maximum of {MAX_BOARD_SIZE}"
        );
        self.settings.board_size = board_size;
        self.snake = Snake::spawn(board_size);
        self.plane = PlaneAxes::default();
        self.direction = START_DIRECTION;
        self.pending = START_DIRECTION;
        self.score = 0;
        self.paused = false;
        self.cause = None;
        self.view = View::for_axis(Axis::Z, Sign::Pos);
        self.pending_growth = 0;
        self.timer.reset(now);
        // At most 3 of N³ >= 64 cells are taken, so a fresh board always has room.
        let Some(food) = place_food(board_size, &self.snake, &mut self.picker) else {
            unreachable!("no empty cell on a fresh {board_size}³ board");
        };
        self.food = food;
        self.sync_view_to_plane();
        debug!(board_size, food = %self.food, "board reset");
    }

    /// Reset and return to the menu.
    pub fn reset_to_menu(&mut self, now: Duration) {
        self.reset(self.settings.board_size, now);
        self.status = GameStatus::Menu;
    }

    /// Start (from the menu) or restart (after game over). Ignored while playing.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.status == GameStatus::Playing {
            return false;
        }
        self.reset(self.settings.board_size, now);
        self.status = GameStatus::Playing;
        info!(board_size = self.settings.board_size, "game started");
        true
    }

    /// Flip the pause flag. Only meaningful while playing.
    pub fn toggle_pause(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
        true
    }

    /// Run one tick if playing, unpaused, and a full interval has elapsed since the last.
    pub fn step(&mut self, now: Duration) -> StepOutcome {
        if !self.is_running() || !self.timer.try_fire(now) {
            return StepOutcome::Idle;
        }
        self.tick()
    }

    /// Run one tick now, ignoring the time gate. Still requires a running game.
    pub fn advance(&mut self) -> StepOutcome {
        if !self.is_running() {
            return StepOutcome::Idle;
        }
        self.tick()
    }

    fn tick(&mut self) -> StepOutcome {
        if !self.direction.is_reverse_of(self.pending) {
            self.direction = self.pending;
        }
        if !self.plane.contains(self.direction.axis) {
            warn!(
                direction = %self.direction,
                plane = %self.plane,
                "direction left the plane; snapping to primary axis"
            );
            self.direction.axis = self.plane.a();
        }

        let size = self.settings.board_size;
        let next = self.snake.head().step(self.direction);
        if !next.in_bounds(size) {
            return self.finish(GameOverCause::OutOfBounds);
        }
        if self.snake.contains(next) {
            return self.finish(GameOverCause::SelfCollision);
        }

        self.snake.push_head(next);

        let mut outcome = StepOutcome::Moved;
        if next == self.food {
            self.score += 1;
            self.pending_growth += 1;
            self.timer.on_food_eaten();
            outcome = match place_food(size, &self.snake, &mut self.picker) {
                Some(food) => {
                    self.food = food;
                    debug!(score = self.score, food = %food, "food eaten");
                    StepOutcome::Ate
                }
                None => self.finish(GameOverCause::BoardFull),
            };
        }

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.snake.pop_tail();
        }

        self.sync_view_to_plane();
        outcome
    }

    fn finish(&mut self, cause: GameOverCause) -> StepOutcome {
        self.status = GameStatus::GameOver;
        self.cause = Some(cause);
        self.sync_view_to_plane();
        info!(?cause, score = self.score, length = self.snake.len(), "game over");
        StepOutcome::GameOver(cause)
    }

    /// Queue a turn for the next tick.
    ///
    /// Dropped unless playing and `dir` lies in the current plane. Reversals are
    /// accepted here and rejected when the tick commits them.
    pub fn request_direction(&mut self, dir: Direction) -> bool {
        if self.status != GameStatus::Playing || !self.plane.contains(dir.axis) {
            return false;
        }
        self.pending = dir;
        true
    }

    /// Queue the turn an arrow press means under the current plane and view.
    pub fn request_arrow(&mut self, arrow: Arrow) -> bool {
        let dir = arrow_to_world(arrow, &self.plane_info());
        self.request_direction(dir)
    }

    /// Turn the movement plane 90° about the direction of travel. Playing only.
    pub fn rotate_plane(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let turn = turn_plane(self.plane, self.direction, self.pending);
        self.plane = turn.plane;
        self.direction = turn.direction;
        self.pending = turn.pending;
        self.sync_view_to_plane();
        debug!(plane = %self.plane, normal = %self.plane.normal(), "plane rotated");
        true
    }

    /// Step through the six views by `offset` (usually ±1), then resynchronize.
    ///
    /// Allowed in every status. Since the view must follow the plane normal,
    /// the visible effect is at most a flip of the front face.
    pub fn cycle_view(&mut self, offset: i32) {
        self.view = self.view.cycled(offset);
        self.sync_view_to_plane();
        debug!(view = %self.view.label(), "view cycled");
    }

    /// Manual speed change. Allowed in every status.
    pub fn adjust_speed(&mut self, change: SpeedChange) {
        self.timer.adjust(change);
        debug!(tick_ms = self.timer.interval_ms(), "speed adjusted");
    }

    /// Point the view at the current plane normal, keeping its sign when possible.
    pub fn sync_view_to_plane(&mut self) {
        self.view = View::for_axis(self.plane.normal(), self.view.sign);
    }

    /// Slice geometry for the current plane, view, and head.
    pub fn plane_info(&self) -> PlaneInfo {
        PlaneInfo::derive(
            self.plane,
            self.view,
            self.snake.head(),
            self.settings.board_size,
        )
    }

    /// Slice grid position of `cell` under the current plane info.
    pub fn cell_to_slice(&self, cell: Cell) -> (i32, i32) {
        cell_to_slice(cell, &self.plane_info())
    }

    /// Project a unit-cube point with the configured minimap rotation.
    pub fn project_to_screen(&self, point: Vec3, center: Vec2, scale: f32) -> ScreenPoint {
        project_to_screen(point, self.settings.minimap, center, scale)
    }

    fn is_running(&self) -> bool {
        self.status == GameStatus::Playing && !self.paused
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn board_size(&self) -> u32 {
        self.settings.board_size
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Why the last run ended, if it has.
    pub fn game_over_cause(&self) -> Option<GameOverCause> {
        self.cause
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.timer.interval_ms()
    }

    pub fn plane(&self) -> PlaneAxes {
        self.plane
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Read-only copy of everything the presentation layer draws.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            paused: self.paused,
            cause: self.cause,
            score: self.score,
            tick_ms: self.timer.interval_ms(),
            plane: self.plane,
            view: self.view,
            info: self.plane_info(),
            snake: self.snake.cells().collect(),
            direction: self.direction,
            food: self.food,
        }
    }
}

impl Game<SeededPicker> {
    /// Game with a seeded uniform food picker.
    pub fn seeded(settings: GameSettings, seed: u64, now: Duration) -> Self {
        Self::new(settings, SeededPicker::new(seed), now)
    }
}
