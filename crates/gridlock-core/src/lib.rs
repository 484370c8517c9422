//! Core data structures for the gridlock sudoku engine.
//!
//! This crate provides the grid data model shared by the solver and the HTTP
//! service:
//!
//! - [`Digit`]: a validated sudoku digit 1-9
//! - [`Position`]: a (row, column) cell address in row-major order
//! - [`Grid`]: the 9×9 board, with the 81-character puzzle text codec
//!
//! # Puzzle text format
//!
//! The external representation of a grid is exactly 81 characters in
//! row-major order, where `.` marks an empty cell and `1`-`9` a filled one.
//! [`Grid`] implements [`FromStr`](std::str::FromStr) for decoding and
//! [`Display`](std::fmt::Display) for encoding.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Digit, Grid, Position};
//!
//! let grid: Grid = "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(grid[Position::new(0, 0)], Digit::new(1));
//! assert_eq!(grid[Position::new(0, 1)], None);
//! assert_eq!(grid.to_string().len(), 81);
//! ```

pub use self::{
    digit::Digit,
    grid::{Grid, ParseGridError},
    position::Position,
};

mod digit;
mod grid;
mod position;
