//! Code for working with [`Location`]s on the playable 8x8 area.

use crate::grid::{Square, PADDED_LENGTH};
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

/// A playable square, as 0-indexed (row, column) coordinates.
/// Ordering is row-major, so sorted locations read top-left to bottom-right.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location {
    row: u8,
    col: u8,
}

/// Legal moves for one side: deduplicated and in ascending (row, column) order.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct MoveList(Vec<Location>);

impl Location {
    /// Convert from row and column coordinates.
    /// Returns None if either coordinate is off the board.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Get the row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Convert from a row-major square index: 0 for the top left, 63 for the bottom right.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= NUM_SPACES {
            return None;
        }
        Self::from_coords(index / EDGE_LENGTH, index % EDGE_LENGTH)
    }

    /// Convert into a row-major square index.
    pub fn to_index(self) -> usize {
        self.row() * EDGE_LENGTH + self.col()
    }

    /// Every playable location, in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES).filter_map(Self::from_index)
    }

    /// The square of the padded grid this location maps to.
    #[inline]
    pub fn to_square(self) -> Square {
        Square::new(self.row() + 1, self.col() + 1)
    }

    /// Map a padded-grid square back to a location. Border squares have none.
    #[inline]
    pub fn from_square(square: Square) -> Option<Self> {
        if square.row == 0 || square.col == 0 {
            return None;
        }
        if square.row >= PADDED_LENGTH || square.col >= PADDED_LENGTH {
            return None;
        }
        Self::from_coords(square.row - 1, square.col - 1)
    }
}

/// Convert this [`Location`] into string notation ("D3" is row 2, column 3).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4"), ignoring case.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseLocationError)
    }
}

impl MoveList {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether `loc` is in this list.
    pub fn contains(&self, loc: Location) -> bool {
        self.0.binary_search(&loc).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.0
    }
}

impl FromIterator<Location> for MoveList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut locations: Vec<Location> = iter.into_iter().collect();
        locations.sort_unstable();
        locations.dedup();
        Self(locations)
    }
}

impl IntoIterator for MoveList {
    type Item = Location;
    type IntoIter = std::vec::IntoIter<Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
