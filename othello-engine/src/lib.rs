//! `othello-engine` is a small, complete Othello (Reversi) engine for drivers and UIs.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`grid`] contains the raw, unchecked operations on a 10x10 mailbox grid whose border
//!    ring holds [`Cell::Edge`] sentinels, so every ray scan stops without a bounds check.
//!    These operations may result in inconsistent state if their contracts are not manually checked.
//!  - [`Board`] implements the checked engine API on playable-area [`Location`]s.
//!    Moves are validated against [`Board::legal_moves`] before the grid is touched.
//!  - [`Game`] is a session around a [`Board`]: named players, turn order, automatic passing
//!    and the final result.

pub mod grid;
pub mod test_utils;

mod board;
mod game;
mod location;
mod side;
mod utils;

pub use board::*;
pub use game::*;
pub use grid::Cell;
pub use location::*;
pub use side::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
