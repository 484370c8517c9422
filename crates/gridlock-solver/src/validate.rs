//! Pre-search validation of puzzle clues.

use gridlock_core::{Grid, Position};

use crate::{SolveError, checker};

/// Verifies that the clues already on the grid do not conflict with each
/// other.
///
/// Cells are scanned in row-major order. Each filled cell's digit is taken
/// out of a working copy, re-tested with [`checker::placement_fits`], and
/// put back before the scan moves on; the caller's grid itself is never
/// touched. Taking the digit out first is what lets a clue be tested against
/// its *peers* rather than against itself.
///
/// Running this once up front keeps the solver from searching, potentially
/// for a very long time, a grid that can never be completed.
///
/// # Errors
///
/// Returns [`SolveError::Inconsistent`] at the first clue that duplicates
/// another clue in its row, column, or region.
pub fn check_givens(grid: &Grid) -> Result<(), SolveError> {
    let mut work = grid.clone();
    for pos in Position::ALL {
        let Some(digit) = work[pos].take() else {
            continue;
        };
        if !checker::placement_fits(&work, pos, digit) {
            return Err(SolveError::Inconsistent);
        }
        work[pos] = Some(digit);
    }
    Ok(())
}
