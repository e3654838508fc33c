//! Low-level operations on the sentinel-bordered mailbox grid.
//!
//! The playable 8x8 area sits inside a one-cell ring of [`Cell::Edge`], so a ray
//! walked outward from any playable [`Square`] always stops before leaving the
//! grid. Operations here are unchecked: [`place_unchecked`] places and flips
//! whether or not the move is legal. Use [`Board`](crate::Board) for validated play.

use crate::{Side, EDGE_LENGTH};
use arrayvec::ArrayVec;
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// Side length of the padded grid, border included.
pub const PADDED_LENGTH: usize = EDGE_LENGTH + 2;

/// The state of a single grid cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Black,
    White,
    Edge,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => Side::Black.piece_char(),
            Cell::White => Side::White.piece_char(),
            Cell::Edge => '*',
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

/// A square of the padded grid. Rows and columns 0 and 9 are the border.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_border(self) -> bool {
        self.row == 0
            || self.col == 0
            || self.row >= PADDED_LENGTH - 1
            || self.col >= PADDED_LENGTH - 1
    }

    /// The neighbouring square along `direction`.
    /// Only defined for playable squares: stepping off the border leaves the grid.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        debug_assert!(!self.is_border());
        Self {
            row: (self.row as isize + direction.d_row as isize) as usize,
            col: (self.col as isize + direction.d_col as isize) as usize,
        }
    }
}

/// A ray direction as a (row, column) delta.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }
}

/// The eight ray directions. Every scan walks them in this order.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(0, -1),  // W
    Direction::new(0, 1),   // E
    Direction::new(-1, 0),  // N
    Direction::new(1, 0),   // S
    Direction::new(1, -1),  // SW
    Direction::new(-1, 1),  // NE
    Direction::new(-1, -1), // NW
    Direction::new(1, 1),   // SE
];

/// Fixed 10x10 cell storage: the 8x8 playable area inside an [`Cell::Edge`] ring.
/// The ring is written once on construction and never again.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Grid {
    cells: [[Cell; PADDED_LENGTH]; PADDED_LENGTH],
}

impl Grid {
    /// A grid with an empty playable area.
    pub fn empty() -> Self {
        let mut cells = [[Cell::Edge; PADDED_LENGTH]; PADDED_LENGTH];
        for row in cells.iter_mut().skip(1).take(EDGE_LENGTH) {
            for cell in row.iter_mut().skip(1).take(EDGE_LENGTH) {
                *cell = Cell::Empty;
            }
        }
        Self { cells }
    }

    /// The standard starting position: white on the centre's main diagonal, black on the other.
    pub fn starting() -> Self {
        let mut grid = Self::empty();
        grid.set_unchecked(Square::new(4, 4), Cell::White);
        grid.set_unchecked(Square::new(4, 5), Cell::Black);
        grid.set_unchecked(Square::new(5, 4), Cell::Black);
        grid.set_unchecked(Square::new(5, 5), Cell::White);
        grid
    }

    #[inline]
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.row][square.col]
    }

    /// Overwrite a playable square.
    /// Writing to the border, or writing [`Cell::Edge`], breaks every later scan.
    #[inline]
    pub fn set_unchecked(&mut self, square: Square, cell: Cell) {
        debug_assert!(!square.is_border() && cell != Cell::Edge);
        self.cells[square.row][square.col] = cell;
    }

    /// The playable squares in row-major order.
    pub fn playable_squares() -> impl Iterator<Item = Square> {
        (1..=EDGE_LENGTH).flat_map(|row| (1..=EDGE_LENGTH).map(move |col| Square::new(row, col)))
    }

    /// The squares holding `side`'s pieces, in row-major order.
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        let piece = Cell::from(side);
        Self::playable_squares().filter(move |&square| self.get(square) == piece)
    }

    /// Count the playable squares holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        Self::playable_squares()
            .filter(|&square| self.get(square) == cell)
            .count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::starting()
    }
}

/// Dump the whole padded grid, border included, with numeric indices.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..PADDED_LENGTH {
            write!(f, " {}", col)?;
        }
        for (index, row) in self.cells.iter().enumerate() {
            write!(f, "\n{}", index)?;
            for cell in row.iter() {
                write!(f, " {}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

/// The contiguous run of opponent pieces next to a square along one direction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ray {
    pub direction: Direction,
    /// Opponent squares in walking order, nearest first. Never empty.
    pub run: ArrayVec<[Square; EDGE_LENGTH]>,
    /// The first square past the run.
    pub stop: Square,
    /// What ended the run: an empty square, one of the walker's own pieces, or the edge.
    pub stop_cell: Cell,
}

/// Walk from `origin` along `direction` over the pieces of `side`'s opponent.
/// Returns None when the first step does not land on an opponent piece.
///
/// # Panics
///
/// Panics if `origin` is on the border.
pub fn cast_ray(grid: &Grid, origin: Square, direction: Direction, side: Side) -> Option<Ray> {
    assert!(!origin.is_border(), "ray origin {:?} is on the border", origin);
    let opponent = Cell::from(!side);
    let mut run: ArrayVec<[Square; EDGE_LENGTH]> = ArrayVec::new();
    let mut square = origin.step(direction);

    while grid.get(square) == opponent {
        run.push(square);
        square = square.step(direction);
    }

    if run.is_empty() {
        return None;
    }

    Some(Ray {
        direction,
        run,
        stop: square,
        stop_cell: grid.get(square),
    })
}

/// Empty squares where `side` can play, in row-major order.
///
/// A ray is cast in every direction from each of `side`'s pieces; a ray that
/// crosses opponent pieces and stops on an empty square marks that square.
pub fn move_candidates(grid: &Grid, side: Side) -> BTreeSet<Square> {
    let mut candidates = BTreeSet::new();

    for origin in grid.squares_of(side) {
        for &direction in DIRECTIONS.iter() {
            if let Some(ray) = cast_ray(grid, origin, direction, side) {
                if ray.stop_cell == Cell::Empty {
                    candidates.insert(ray.stop);
                }
            }
        }
    }

    candidates
}

/// The runs a piece of `side` at `square` captures: rays ending on one of its own pieces.
/// Panics if `square` is on the border, as [`cast_ray`] does.
pub fn captures(grid: &Grid, square: Square, side: Side) -> impl Iterator<Item = Ray> + '_ {
    let own = Cell::from(side);
    DIRECTIONS
        .iter()
        .filter_map(move |&direction| cast_ray(grid, square, direction, side))
        .filter(move |ray| ray.stop_cell == own)
}

/// Place a piece of `side` at `square` and flip every captured run.
/// Does not check that `square` is empty or that anything is captured.
/// Returns the flipped squares, grouped by direction in [`DIRECTIONS`] order.
pub fn place_unchecked(grid: &mut Grid, square: Square, side: Side) -> Vec<Square> {
    let own = Cell::from(side);
    grid.set_unchecked(square, own);

    let flipped: Vec<Square> = captures(grid, square, side)
        .flat_map(|ray| ray.run)
        .collect();
    for &captured in flipped.iter() {
        grid.set_unchecked(captured, own);
    }

    flipped
}
