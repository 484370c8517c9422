//! Row, column, and region placement predicates.
//!
//! These are pure reads over a [`Grid`]: nothing here mutates. A caller
//! asking whether a digit may legally occupy a currently *filled* cell must
//! clear that cell first, since the predicates cannot tell the target cell
//! apart from its peers. The clue validator does exactly that; the
//! placement-check endpoint deliberately does not, covering the self-cell
//! case with an equal-value short-circuit instead.

use bitflags::bitflags;
use gridlock_core::{Digit, Grid, Position};

bitflags! {
    /// The set of uniqueness constraints a candidate placement violates.
    ///
    /// Flags are declared in the contract's reporting order: row, then
    /// column, then region.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Conflicts: u8 {
        /// A cell in the same row already holds the digit.
        const ROW = 1;
        /// A cell in the same column already holds the digit.
        const COLUMN = 1 << 1;
        /// A cell in the same 3×3 region already holds the digit.
        const REGION = 1 << 2;
    }
}

/// Returns `true` if no cell in `row` currently holds `digit`.
///
/// # Panics
///
/// Panics if `row` is not in the range 0-8.
#[must_use]
pub fn row_allows(grid: &Grid, row: u8, digit: Digit) -> bool {
    (0..9).all(|col| grid[Position::new(row, col)] != Some(digit))
}

/// Returns `true` if no cell in `col` currently holds `digit`.
///
/// # Panics
///
/// Panics if `col` is not in the range 0-8.
#[must_use]
pub fn column_allows(grid: &Grid, col: u8, digit: Digit) -> bool {
    (0..9).all(|row| grid[Position::new(row, col)] != Some(digit))
}

/// Returns `true` if no cell in the 3×3 region containing `pos` holds
/// `digit`.
#[must_use]
pub fn region_allows(grid: &Grid, pos: Position, digit: Digit) -> bool {
    let anchor = pos.region_anchor();
    (anchor.row()..anchor.row() + 3).all(|row| {
        (anchor.col()..anchor.col() + 3).all(|col| grid[Position::new(row, col)] != Some(digit))
    })
}

/// Returns `true` if placing `digit` at `pos` violates none of the three
/// uniqueness constraints.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, Grid, Position};
/// use gridlock_solver::placement_fits;
///
/// let mut grid = Grid::new();
/// grid[Position::new(0, 0)] = Digit::new(5);
///
/// // 5 is taken in row 0, column 0, and the top-left region.
/// assert!(!placement_fits(&grid, Position::new(0, 8), Digit::new(5).unwrap()));
/// assert!(!placement_fits(&grid, Position::new(8, 0), Digit::new(5).unwrap()));
/// assert!(!placement_fits(&grid, Position::new(2, 2), Digit::new(5).unwrap()));
/// assert!(placement_fits(&grid, Position::new(8, 8), Digit::new(5).unwrap()));
/// ```
#[must_use]
pub fn placement_fits(grid: &Grid, pos: Position, digit: Digit) -> bool {
    row_allows(grid, pos.row(), digit)
        && column_allows(grid, pos.col(), digit)
        && region_allows(grid, pos, digit)
}

/// Reports which constraints placing `digit` at `pos` would violate.
///
/// An empty set means the placement fits.
#[must_use]
pub fn conflicts_at(grid: &Grid, pos: Position, digit: Digit) -> Conflicts {
    let mut conflicts = Conflicts::empty();
    if !row_allows(grid, pos.row(), digit) {
        conflicts |= Conflicts::ROW;
    }
    if !column_allows(grid, pos.col(), digit) {
        conflicts |= Conflicts::COLUMN;
    }
    if !region_allows(grid, pos, digit) {
        conflicts |= Conflicts::REGION;
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{PUZZLES, digit, grid};

    #[test]
    fn test_row_allows() {
        let board = grid(PUZZLES[0].0);
        assert!(row_allows(&board, 1, digit(9)));
        assert!(row_allows(&board, 6, digit(9)));
        assert!(!row_allows(&board, 0, digit(8)));
        assert!(!row_allows(&board, 6, digit(1)));
    }

    #[test]
    fn test_column_allows() {
        let board = grid(PUZZLES[1].0);
        assert!(column_allows(&board, 1, digit(1)));
        assert!(column_allows(&board, 5, digit(9)));
        assert!(!column_allows(&board, 1, digit(8)));
        assert!(!column_allows(&board, 5, digit(1)));
    }

    #[test]
    fn test_region_allows() {
        let board = grid(PUZZLES[2].0);
        assert!(region_allows(&board, Position::new(6, 6), digit(9)));
        assert!(region_allows(&board, Position::new(0, 7), digit(1)));

        let board = grid(PUZZLES[3].0);
        assert!(!region_allows(&board, Position::new(4, 2), digit(7)));
        assert!(!region_allows(&board, Position::new(1, 3), digit(9)));
    }

    #[test]
    fn test_conflicts_at_reports_each_axis() {
        // Cell A2 (row 0, column 1) of the first fixture puzzle is empty.
        // Row 0 holds {1, 2, 4, 5, 8}, column 1 holds {2, 6, 7, 9}, and the
        // top-left region holds {1, 2, 5, 6}.
        let board = grid(PUZZLES[0].0);
        let pos = Position::new(0, 1);

        assert_eq!(conflicts_at(&board, pos, digit(3)), Conflicts::empty());
        assert_eq!(conflicts_at(&board, pos, digit(8)), Conflicts::ROW);
        assert_eq!(
            conflicts_at(&board, pos, digit(1)),
            Conflicts::ROW | Conflicts::REGION
        );
        assert_eq!(
            conflicts_at(&board, pos, digit(2)),
            Conflicts::ROW | Conflicts::COLUMN | Conflicts::REGION
        );
    }

    #[test]
    fn test_predicates_do_not_mutate() {
        let board = grid(PUZZLES[0].0);
        let before = board.clone();
        for pos in Position::ALL {
            for d in Digit::ALL {
                let _ = placement_fits(&board, pos, d);
                let _ = conflicts_at(&board, pos, d);
            }
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_grid_allows_everything() {
        let board = Grid::new();
        for pos in Position::ALL {
            for d in Digit::ALL {
                assert_eq!(conflicts_at(&board, pos, d), Conflicts::empty());
            }
        }
    }
}
