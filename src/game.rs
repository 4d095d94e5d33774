use std::collections::HashSet;

use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use thiserror::Error;

use crate::food::{self, PlacementError};
use crate::grid::{Cell, Grid, GridError};
use crate::input::{is_illegal_reversal, Direction, DirectionBuffer};
use crate::snake::Snake;

/// Direction a fresh snake starts out with.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Result of one tick. `Win` and `Loss` are absorbing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Outcome {
    Continue,
    Win,
    Loss,
}

impl Outcome {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// Why a game ended in [`Outcome::Loss`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum LossCause {
    WallCollision,
    SelfCollision,
}

/// Broken simulation state. Never produced by normal play.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("snake segment {0:?} lies outside the grid")]
    SegmentOutOfBounds(Cell),
    #[error("snake occupies {0:?} more than once")]
    DuplicateSegment(Cell),
    #[error("food at {0:?} lies outside the grid")]
    FoodOutOfBounds(Cell),
    #[error("food at {0:?} overlaps the snake")]
    FoodOnSnake(Cell),
    #[error("no food on the board while free cells remain")]
    MissingFood,
}

/// Read-only copy of everything a host needs to draw one frame.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    pub rows: u16,
    pub cols: u16,
    pub tick: u64,
    pub outcome: Outcome,
    pub paused: bool,
    pub direction: Direction,
    pub snake: Vec<u16>,
    pub food: Option<Cell>,
    pub loss_cause: Option<LossCause>,
}

/// Complete simulation state for one session.
#[derive(Debug, Clone)]
pub struct Universe {
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    buffer: DirectionBuffer,
    outcome: Outcome,
    loss_cause: Option<LossCause>,
    paused: bool,
    tick_count: u64,
    rng: StdRng,
}

impl Universe {
    /// Creates a universe seeded from the operating system.
    pub fn new(rows: u16, cols: u16) -> Result<Self, GridError> {
        Self::with_rng(rows, cols, StdRng::from_entropy())
    }

    /// Creates a deterministic universe for tests and reproducible runs.
    pub fn new_with_seed(rows: u16, cols: u16, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(rows, cols, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rows: u16, cols: u16, mut rng: StdRng) -> Result<Self, GridError> {
        let grid = Grid::new(rows, cols)?;
        let snake = Snake::new(grid.center(), INITIAL_DIRECTION);

        // A 1x1 grid is already full.
        let (food, outcome) = match food::place(&mut rng, grid, &snake.occupied()) {
            Ok(cell) => (Some(cell), Outcome::Continue),
            Err(PlacementError::Exhausted { .. }) => (None, Outcome::Win),
        };

        Ok(Self {
            grid,
            snake,
            food,
            buffer: DirectionBuffer::default(),
            outcome,
            loss_cause: None,
            paused: false,
            tick_count: 0,
            rng,
        })
    }

    /// Builds a mid-game universe from explicit parts, refusing broken states.
    pub fn from_parts(
        grid: Grid,
        snake: Snake,
        food: Option<Cell>,
        seed: u64,
    ) -> Result<Self, InvariantViolation> {
        // Without food the board is full.
        let outcome = if food.is_none() {
            Outcome::Win
        } else {
            Outcome::Continue
        };
        let universe = Self {
            grid,
            snake,
            food,
            buffer: DirectionBuffer::default(),
            outcome,
            loss_cause: None,
            paused: false,
            tick_count: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        universe.validate()?;
        Ok(universe)
    }

    /// Advances the simulation by one step.
    pub fn tick(&mut self) -> Outcome {
        if self.paused {
            return Outcome::Continue;
        }
        if self.outcome.is_terminal() {
            return self.outcome;
        }

        self.tick_count += 1;
        self.apply_buffered_direction();

        let direction = self.snake.direction();
        let next_head = self
            .snake
            .head()
            .shifted(direction)
            .filter(|cell| self.grid.contains(*cell));
        trace!("tick {}: heading {direction:?} to {next_head:?}", self.tick_count);

        let Some(next_head) = next_head else {
            self.lose(LossCause::WallCollision);
            return self.outcome;
        };

        if self.snake.would_collide(next_head) {
            self.lose(LossCause::SelfCollision);
            return self.outcome;
        }

        if self.food == Some(next_head) {
            self.snake.advance(next_head, true);
            match food::place(&mut self.rng, self.grid, &self.snake.occupied()) {
                Ok(cell) => {
                    debug!("food eaten at {next_head:?}, relocated to {cell:?}");
                    self.food = Some(cell);
                }
                Err(PlacementError::Exhausted { .. }) => {
                    debug!("grid filled after {} ticks", self.tick_count);
                    self.food = None;
                    self.outcome = Outcome::Win;
                }
            }
        } else {
            self.snake.advance(next_head, false);
        }

        debug_assert_eq!(
            self.validate(),
            Ok(()),
            "simulation invariant broken after tick {}",
            self.tick_count
        );

        self.outcome
    }

    /// Requests a new heading for the next tick.
    ///
    /// Reversals of a multi-cell snake and requests after the game ended are
    /// ignored.
    pub fn buffer_direction(&mut self, direction: Direction) {
        if self.outcome.is_terminal() {
            return;
        }

        if !self
            .buffer
            .request(direction, self.snake.direction(), self.snake.length())
        {
            trace!("ignored reversal to {direction:?}");
        }
    }

    /// Flips the pause flag. Has no effect once the game ended.
    pub fn toggle_pause(&mut self) {
        if self.outcome.is_terminal() {
            return;
        }

        self.paused = !self.paused;
    }

    fn apply_buffered_direction(&mut self) {
        let Some(requested) = self.buffer.take() else {
            return;
        };

        if !is_illegal_reversal(self.snake.direction(), requested, self.snake.length()) {
            self.snake.set_direction(requested);
        }
    }

    fn lose(&mut self, cause: LossCause) {
        debug!("game lost after {} ticks: {cause:?}", self.tick_count);
        self.outcome = Outcome::Loss;
        self.loss_cause = Some(cause);
    }

    /// Checks every state invariant, reporting the first violation.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::with_capacity(self.snake.length());
        for &segment in self.snake.segments() {
            if !self.grid.contains(segment) {
                return Err(InvariantViolation::SegmentOutOfBounds(segment));
            }
            if !seen.insert(segment) {
                return Err(InvariantViolation::DuplicateSegment(segment));
            }
        }

        match self.food {
            Some(cell) if !self.grid.contains(cell) => {
                Err(InvariantViolation::FoodOutOfBounds(cell))
            }
            Some(cell) if seen.contains(&cell) => Err(InvariantViolation::FoodOnSnake(cell)),
            None if seen.len() < self.grid.cell_count() => Err(InvariantViolation::MissingFood),
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.grid.rows()
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.grid.cols()
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn snake_length(&self) -> usize {
        self.snake.length()
    }

    /// Flattened `[row, col, ...]` body coordinates, head first.
    #[must_use]
    pub fn snake_to_coordinates(&self) -> Vec<u16> {
        self.snake.to_coordinate_pairs()
    }

    /// `[row, col]` of the food, or empty once the grid is full.
    #[must_use]
    pub fn food_to_coordinates(&self) -> Vec<u16> {
        self.food
            .map(|cell| vec![cell.row, cell.col])
            .unwrap_or_default()
    }

    #[must_use]
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.buffer.pending()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn loss_cause(&self) -> Option<LossCause> {
        self.loss_cause
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of ticks that moved the simulation.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self.rows(),
            cols: self.cols(),
            tick: self.tick_count,
            outcome: self.outcome,
            paused: self.paused,
            direction: self.direction(),
            snake: self.snake_to_coordinates(),
            food: self.food,
            loss_cause: self.loss_cause,
        }
    }
}
