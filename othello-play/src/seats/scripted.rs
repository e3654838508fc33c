use super::{Seat, SeatError};
use othello_engine::{Game, Location, MoveList};
use std::collections::VecDeque;

/// Replays a fixed list of moves in play order, whichever side is to move.
/// Moves are handed out as written; the game rejects any that are illegal.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSeat {
    moves: VecDeque<Location>,
}

impl ScriptedSeat {
    pub fn new(moves: impl IntoIterator<Item = Location>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Seat for ScriptedSeat {
    fn choose_move(&mut self, game: &Game, _legal: &MoveList) -> Result<Location, SeatError> {
        self.moves.pop_front().ok_or(SeatError::ScriptExhausted {
            side: game.to_move(),
        })
    }
}
