//! Seats supply the moves for one or both sides of a game.

mod middle;
mod scripted;
mod seat;
mod terminal;

pub use middle::MiddleMoveSeat;
pub use scripted::ScriptedSeat;
pub use seat::{Seat, SeatError};
pub use terminal::{parse_move, TerminalSeat};
