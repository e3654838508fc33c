//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Lay out one character per playable square as a labelled grid.
/// `cells` must yield exactly 64 items in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(mut cells: T, f: &mut Formatter) -> fmt::Result {
    write!(f, "  A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n{}", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, " {}", cells.next().ok_or(fmt::Error)?)?;
        }
    }

    match cells.next() {
        None => Ok(()),
        Some(_) => Err(fmt::Error),
    }
}
