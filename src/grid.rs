use serde::Serialize;
use thiserror::Error;

use crate::input::Direction;

/// Errors raised while constructing a grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: u16, cols: u16 },
}

/// Grid cell in `(row, col)` coordinates. Rows grow downward.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
}

impl Cell {
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Returns the neighbor one step along `direction`.
    ///
    /// Yields `None` when the step would leave the non-negative quadrant;
    /// the upper edges are checked by [`Grid::contains`].
    #[must_use]
    pub fn shifted(self, direction: Direction) -> Option<Self> {
        let (row, col) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row.checked_add(1)?, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col.checked_add(1)?),
        };
        Some(Self { row, col })
    }
}

/// Fixed rectangular playing field.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Grid {
    rows: u16,
    cols: u16,
}

impl Grid {
    /// Creates a grid, rejecting a zero extent on either axis.
    pub fn new(rows: u16, cols: u16) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        Ok(Self { rows, cols })
    }

    #[must_use]
    pub fn rows(self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn cols(self) -> u16 {
        self.cols
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn cell_count(self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    /// Returns true when `cell` lies inside the grid.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Cell the snake starts on.
    #[must_use]
    pub fn center(self) -> Cell {
        Cell::new(self.rows / 2, self.cols / 2)
    }

    /// Iterates every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Cell, Grid, GridError};

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(GridError::InvalidDimensions { rows: 5, cols: 0 })
        );
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn contains_respects_both_upper_bounds() {
        let grid = Grid::new(3, 4).expect("valid grid");

        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(2, 3)));
        assert!(!grid.contains(Cell::new(3, 0)));
        assert!(!grid.contains(Cell::new(0, 4)));
    }

    #[test]
    fn shifting_off_the_top_left_edge_yields_none() {
        let origin = Cell::new(0, 0);

        assert_eq!(origin.shifted(Direction::Up), None);
        assert_eq!(origin.shifted(Direction::Left), None);
        assert_eq!(origin.shifted(Direction::Down), Some(Cell::new(1, 0)));
        assert_eq!(origin.shifted(Direction::Right), Some(Cell::new(0, 1)));
    }

    #[test]
    fn cells_enumerates_row_major() {
        let grid = Grid::new(2, 3).expect("valid grid");
        let cells: Vec<Cell> = grid.cells().collect();

        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[3], Cell::new(1, 0));
        assert_eq!(cells[5], Cell::new(1, 2));
    }

    #[test]
    fn center_rounds_down() {
        assert_eq!(Grid::new(3, 3).expect("valid grid").center(), Cell::new(1, 1));
        assert_eq!(Grid::new(4, 1).expect("valid grid").center(), Cell::new(2, 0));
    }
}
