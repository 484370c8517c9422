//! The external `A1`-`I9` coordinate form of the check operation.

use std::str::FromStr;

use gridlock_core::Position;

/// A board coordinate as clients write it: a row letter `A`-`I`
/// (case-insensitive) followed by a 1-based column digit `1`-`9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Coordinate(Position);

impl Coordinate {
    /// The addressed cell.
    pub(crate) fn position(self) -> Position {
        self.0
    }
}

/// The coordinate did not match `[A-Ia-i][1-9]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid coordinate")]
pub(crate) struct ParseCoordinateError;

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCoordinateError);
        };
        let row = match letter.to_ascii_uppercase() {
            ch @ 'A'..='I' => ch as u8 - b'A',
            _ => return Err(ParseCoordinateError),
        };
        let col = match digit {
            ch @ '1'..='9' => ch as u8 - b'1',
            _ => return Err(ParseCoordinateError),
        };
        Ok(Self(Position::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_corners() {
        assert_eq!(
            "A1".parse::<Coordinate>().unwrap().position(),
            Position::new(0, 0)
        );
        assert_eq!(
            "I9".parse::<Coordinate>().unwrap().position(),
            Position::new(8, 8)
        );
        assert_eq!(
            "E5".parse::<Coordinate>().unwrap().position(),
            Position::new(4, 4)
        );
    }

    #[test]
    fn test_letter_is_case_insensitive() {
        assert_eq!("a2".parse::<Coordinate>(), "A2".parse::<Coordinate>());
        assert_eq!("i9".parse::<Coordinate>(), "I9".parse::<Coordinate>());
    }

    #[test]
    fn test_rejects_malformed_coordinates() {
        for input in ["", "A", "A12", "Z2", "J1", "A0", "5A", "AA", "A 1", "1A"] {
            assert_eq!(input.parse::<Coordinate>(), Err(ParseCoordinateError));
        }
    }
}
