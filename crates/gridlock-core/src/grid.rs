//! The 9×9 puzzle grid and its text codec.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Digit, Position};

const CELLS: usize = 81;

/// A 9×9 sudoku grid.
///
/// Cells hold `Option<Digit>`; `None` is an empty cell. The grid is always
/// exactly 9×9 and is indexed by [`Position`].
///
/// The external text form is 81 characters in row-major order, `.` for an
/// empty cell and `1`-`9` for a filled one. Parsing via [`FromStr`] decodes
/// it; the [`Display`] impl encodes it back. For any fully filled grid the
/// two are inverses.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// let pos = Position::new(4, 4);
/// grid[pos] = Digit::new(5);
/// assert_eq!(grid[pos], Digit::new(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; CELLS],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    /// Returns the first empty cell in row-major order, if any.
    ///
    /// This is the cell the solver branches on next; `None` means the grid
    /// is complete.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self[pos].is_none())
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

/// Errors from decoding puzzle text.
///
/// The `Display` messages are part of the service's wire contract and are
/// surfaced to clients verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input is not exactly 81 characters long.
    #[display("Expected puzzle to be 81 characters long")]
    BadLength {
        /// Actual character count of the input.
        len: usize,
    },
    /// The input contains a character other than `.` or `1`-`9`.
    #[display("Invalid characters in puzzle")]
    BadCharacter {
        /// First offending character.
        found: char,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Decodes an 81-character puzzle string.
    ///
    /// Length is checked before content: an input of the wrong length is
    /// [`ParseGridError::BadLength`] even if it also contains invalid
    /// characters.
    ///
    /// # Errors
    ///
    /// Returns [`ParseGridError::BadLength`] if the input is not exactly 81
    /// characters, and [`ParseGridError::BadCharacter`] if any character is
    /// not `.` or `1`-`9`. Whitespace and `0` are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != CELLS {
            return Err(ParseGridError::BadLength { len });
        }

        let mut cells = [None; CELLS];
        for (slot, ch) in cells.iter_mut().zip(s.chars()) {
            if ch == '.' {
                continue;
            }
            let digit =
                Digit::from_ascii(ch).ok_or(ParseGridError::BadCharacter { found: ch })?;
            *slot = Some(digit);
        }
        Ok(Self { cells })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
