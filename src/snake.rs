use std::collections::{HashSet, VecDeque};

use crate::grid::Cell;
use crate::input::Direction;

/// Snake body (head first) and its current heading.
///
/// The body is never empty: every constructor inserts at least one cell and
/// [`Snake::advance`] pushes before it pops.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` heading `direction`.
    #[must_use]
    pub fn new(start: Cell, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body, direction }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
            direction,
        })
    }

    /// Moves the head onto `new_head`, dropping the tail unless `grows`.
    ///
    /// Callers validate `new_head` with [`Snake::would_collide`] first.
    pub fn advance(&mut self, new_head: Cell, grows: bool) {
        self.body.push_front(new_head);
        if !grows {
            let _ = self.body.pop_back();
        }
    }

    /// Returns true if moving onto `new_head` without growing would hit the
    /// body. The tail is excluded since it vacates in the same step.
    #[must_use]
    pub fn would_collide(&self, new_head: Cell) -> bool {
        let checked = self.body.len() - 1;
        self.body.iter().take(checked).any(|segment| *segment == new_head)
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Returns the last body cell.
    #[must_use]
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Returns current segment count.
    #[must_use]
    pub fn length(&self) -> usize {
        self.body.len()
    }

    /// Returns the last applied movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns the occupied cells as a set.
    #[must_use]
    pub fn occupied(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    /// Flattens the body into `[row, col, row, col, ...]`, head first.
    #[must_use]
    pub fn to_coordinate_pairs(&self) -> Vec<u16> {
        self.body
            .iter()
            .flat_map(|cell| [cell.row, cell.col])
            .collect()
    }
}
