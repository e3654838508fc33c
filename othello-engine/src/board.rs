//! The checked Othello engine on playable-area [`Location`]s.
//!
//! [`Board`] wraps a [`Grid`] and never lets an illegal move reach it: every
//! placement is checked against [`Board::legal_moves`] first. Hot loops that
//! already know a move is legal can use [`grid`] directly.

use crate::grid::{self, Cell, Grid};
use crate::{utils, Location, MoveList, Side, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// A complete Othello position.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    grid: Grid,
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    Winner(Side),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{} wins", side),
            Outcome::Tie => f.write_str("Tie"),
        }
    }
}

/// A move that has been applied to a board.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Placement {
    pub side: Side,
    pub location: Location,
    /// Opponent pieces turned to `side`, grouped by direction.
    pub flipped: Vec<Location>,
}

/// `location` is not among the legal moves for `side`. The board was not changed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
#[display(fmt = "{} is not a legal move for {}", location, side)]
pub struct IllegalMove {
    pub side: Side,
    pub location: Location,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected character {:?} in board string", found)]
    InvalidCell { found: char },
    #[display(fmt = "board string has {} cells, expected 64", count)]
    WrongLength { count: usize },
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        Self {
            grid: Grid::starting(),
        }
    }

    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            grid: Grid::empty(),
        }
    }

    /// Wrap a raw grid. Its edge ring must be intact.
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The state of a playable square. Never [`Cell::Edge`].
    pub fn get(&self, location: Location) -> Cell {
        self.grid.get(location.to_square())
    }

    /// Every location where `side` can play, in ascending (row, column) order.
    pub fn legal_moves(&self, side: Side) -> MoveList {
        grid::move_candidates(&self.grid, side)
            .into_iter()
            .filter_map(Location::from_square)
            .collect()
    }

    pub fn is_legal(&self, side: Side, location: Location) -> bool {
        self.legal_moves(side).contains(location)
    }

    /// Place a piece for `side` and flip every captured run.
    /// Rejects locations outside [`Board::legal_moves`] without touching the board.
    pub fn apply_move(&mut self, side: Side, location: Location) -> Result<Placement, IllegalMove> {
        if !self.is_legal(side, location) {
            return Err(IllegalMove { side, location });
        }

        let flipped = grid::place_unchecked(&mut self.grid, location.to_square(), side)
            .into_iter()
            .filter_map(Location::from_square)
            .collect();

        Ok(Placement {
            side,
            location,
            flipped,
        })
    }

    pub fn count_pieces(&self, side: Side) -> usize {
        self.grid.count(Cell::from(side))
    }

    /// True once every playable square holds a piece.
    pub fn is_game_over(&self) -> bool {
        self.count_pieces(Side::Black) + self.count_pieces(Side::White) == NUM_SPACES
    }

    /// The result of a full board; None while any square is empty.
    pub fn winner(&self) -> Option<Outcome> {
        if self.is_game_over() {
            Some(self.leader())
        } else {
            None
        }
    }

    /// Compare piece counts, whether or not the board is full.
    pub fn leader(&self) -> Outcome {
        let black = self.count_pieces(Side::Black);
        let white = self.count_pieces(Side::White);
        if black > white {
            Outcome::Winner(Side::Black)
        } else if white > black {
            Outcome::Winner(Side::White)
        } else {
            Outcome::Tie
        }
    }
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            Grid::playable_squares().map(|square| self.grid.get(square).to_char()),
            f,
        )
    }
}

/// Parse 64 cells in row-major order: `X` black, `O` white, `.` or `-` empty.
/// Whitespace is ignored, so fixtures can be written one row per line.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' | 'x' => Ok(Cell::Black),
                'O' | 'o' => Ok(Cell::White),
                '.' | '-' => Ok(Cell::Empty),
                found => Err(ParseBoardError::InvalidCell { found }),
            })
            .collect::<Result<Vec<Cell>, ParseBoardError>>()?;

        if cells.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { count: cells.len() });
        }

        let mut grid = Grid::empty();
        for (square, cell) in Grid::playable_squares().zip(cells) {
            grid.set_unchecked(square, cell);
        }
        Ok(Self { grid })
    }
}
