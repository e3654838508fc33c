use derive_more::{Display, Error};
use othello_engine::{Game, Location, MoveList, Side};
use std::io;

/// A source of moves for whichever side a game puts in front of it.
pub trait Seat {
    /// Choose a placement for `game.to_move()`. `legal` is never empty.
    fn choose_move(&mut self, game: &Game, legal: &MoveList) -> Result<Location, SeatError>;
}

#[derive(Debug, Display, Error)]
pub enum SeatError {
    #[display(fmt = "{} resigned", side)]
    Resigned { side: Side },
    #[display(fmt = "{} has no legal move", side)]
    NoLegalMove { side: Side },
    #[display(fmt = "the script has no move left for {}", side)]
    ScriptExhausted { side: Side },
    #[display(fmt = "input closed before {} moved", side)]
    InputClosed { side: Side },
    #[display(fmt = "failed to talk to the terminal: {}", source)]
    Io { source: io::Error },
}

impl From<io::Error> for SeatError {
    fn from(source: io::Error) -> Self {
        SeatError::Io { source }
    }
}
