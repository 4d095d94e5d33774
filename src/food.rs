use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::grid::{Cell, Grid};

/// Food placement failures.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum PlacementError {
    /// Every cell of the grid is excluded.
    #[error("no free cell left on a {rows}x{cols} grid")]
    Exhausted { rows: u16, cols: u16 },
}

/// Picks a cell uniformly among those not in `excluding`.
///
/// The free cells are enumerated up front, so the cost is bounded by the
/// grid size no matter how crowded the board is.
pub fn place<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    excluding: &HashSet<Cell>,
) -> Result<Cell, PlacementError> {
    let candidates: Vec<Cell> = grid
        .cells()
        .filter(|cell| !excluding.contains(cell))
        .collect();

    if candidates.is_empty() {
        return Err(PlacementError::Exhausted {
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}
