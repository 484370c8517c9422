//! Exhaustive depth-first search with backtracking.

use gridlock_core::{Digit, Grid};

use crate::{SolveError, checker, validate};

/// Counters describing a single solve run.
///
/// Useful for logging and for tests that care about search behavior; the
/// solver imposes no cap on either counter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Tentative placements made during the search, including undone ones.
    pub placements: usize,
    /// Placements undone after the branch below them dead-ended.
    pub backtracks: usize,
}

/// Solves a puzzle, returning the completed grid.
///
/// Clues are validated once with [`validate::check_givens`]; the search
/// itself never re-validates. Empty cells are filled in row-major order and
/// candidates tried in ascending order, so for any given input the same
/// completion is found every time: the first one reachable under that fixed
/// order.
///
/// The input grid is not modified; the search runs on its own copy. Worst
/// case the search explores an exponential portion of the candidate space
/// and no timeout is imposed, so a caller needing bounded latency must
/// enforce a deadline externally.
///
/// # Errors
///
/// Returns [`SolveError::Inconsistent`] if the puzzle's clues conflict with
/// each other, and [`SolveError::NoSolution`] if the search exhausts every
/// assignment without completing the grid.
///
/// # Examples
///
/// ```
/// use gridlock_core::Grid;
/// use gridlock_solver::solve;
///
/// let puzzle: Grid = "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
///     .parse()
///     .unwrap();
///
/// let solution = solve(&puzzle).unwrap();
/// assert_eq!(
///     solution.to_string(),
///     "135762984946381257728459613694517832812936745357824196473298561581673429269145378"
/// );
/// ```
pub fn solve(puzzle: &Grid) -> Result<Grid, SolveError> {
    solve_with_stats(puzzle).map(|(grid, _)| grid)
}

/// Like [`solve`], additionally reporting search counters.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_with_stats(puzzle: &Grid) -> Result<(Grid, SolveStats), SolveError> {
    validate::check_givens(puzzle)?;

    let mut work = puzzle.clone();
    let mut stats = SolveStats::default();
    if search(&mut work, &mut stats) {
        log::trace!(
            "search succeeded after {} placements ({} undone)",
            stats.placements,
            stats.backtracks
        );
        Ok((work, stats))
    } else {
        log::trace!(
            "search exhausted after {} placements ({} undone)",
            stats.placements,
            stats.backtracks
        );
        Err(SolveError::NoSolution)
    }
}

/// Fills the first empty cell and recurses. Returns `true` when no empty
/// cell remains.
///
/// On failure every tentative placement below the current frame has already
/// been undone, so the grid is exactly as the caller left it.
fn search(grid: &mut Grid, stats: &mut SolveStats) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };

    for digit in Digit::ALL {
        if !checker::placement_fits(grid, pos, digit) {
            continue;
        }
        grid[pos] = Some(digit);
        stats.placements += 1;
        if search(grid, stats) {
            return true;
        }
        grid[pos] = None;
        stats.backtracks += 1;
    }
    false
}
