//! The two sides of an Othello game.

use derive_more::{Display, Error};
use std::fmt;

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Black,
    White,
}

impl Default for Side {
    /// Gets the starting side (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl Side {
    /// Lowercase name, as accepted by [`str::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Side::Black => "black",
            Side::White => "white",
        }
    }

    /// Character used for this side's pieces in board dumps.
    pub fn piece_char(self) -> char {
        match self {
            Side::Black => 'X',
            Side::White => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("Black"),
            Side::White => f.write_str("White"),
        }
    }
}

/// A side name that is neither black nor white.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid side {:?}: must be black or white", name)]
pub struct InvalidSide {
    pub name: String,
}

/// Parse a side name, ignoring case and surrounding whitespace ("bLaCk" is black).
impl std::str::FromStr for Side {
    type Err = InvalidSide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Side::Black),
            "white" => Ok(Side::White),
            _ => Err(InvalidSide {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_not() {
        assert_eq!(!Side::Black, Side::White);
        assert_eq!(!Side::White, Side::Black);
    }

    #[test]
    fn side_from_str_ignores_case() {
        assert_eq!("black".parse(), Ok(Side::Black));
        assert_eq!("bLaCk".parse(), Ok(Side::Black));
        assert_eq!(" WHITE ".parse(), Ok(Side::White));
    }

    #[test]
    fn side_from_str_fail() {
        assert_eq!(
            "green".parse::<Side>(),
            Err(InvalidSide {
                name: "green".to_string()
            })
        );
        assert!("".parse::<Side>().is_err());
    }

    #[test]
    fn invalid_side_display() {
        let err = "green".parse::<Side>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid side \"green\": must be black or white"
        );
    }
}
