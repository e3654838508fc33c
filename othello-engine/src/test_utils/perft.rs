//! "Perft" move-generation test: count the number of leaves at a given depth.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::grid::{self, Grid};
use crate::Side;

/// Count the leaves `depth` plies below the starting position.
/// A side without moves passes; two passes in a row end the game.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Grid::starting(), Side::Black, depth, false)
}

fn leaves_below(grid: Grid, side: Side, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let candidates = grid::move_candidates(&grid, side);
    if candidates.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(grid, !side, depth - 1, true);
    }

    candidates
        .into_iter()
        .map(|square| {
            let mut next = grid;
            grid::place_unchecked(&mut next, square, side);
            leaves_below(next, !side, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}
