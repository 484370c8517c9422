//! Constraint checking and backtracking search for 9×9 sudoku.
//!
//! This crate houses the three pieces of solving logic:
//!
//! - placement predicates ([`row_allows`], [`column_allows`],
//!   [`region_allows`], [`placement_fits`], [`conflicts_at`]) that test
//!   whether a digit may occupy a cell without duplicating a filled peer
//! - [`check_givens`], which rejects puzzles whose clues already conflict
//!   before any search is attempted
//! - [`solve`] / [`solve_with_stats`], the exhaustive depth-first search that
//!   fills the remaining cells or reports that no completion exists
//!
//! All functions are pure with respect to their input grid: each solve works
//! on its own copy, so a caller may reuse one grid sequentially or run
//! independent solves concurrently on separate grids.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::Grid;
//! use gridlock_solver::solve;
//!
//! let puzzle: Grid = "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//!     .parse()
//!     .unwrap();
//!
//! let solution = solve(&puzzle).unwrap();
//! assert!(solution.is_complete());
//! ```

pub use self::{
    backtrack::{SolveStats, solve, solve_with_stats},
    checker::{Conflicts, column_allows, conflicts_at, placement_fits, region_allows, row_allows},
    error::SolveError,
    validate::check_givens,
};

mod backtrack;
mod checker;
mod error;
mod validate;

#[cfg(test)]
mod fixtures;
