//! Drives Othello games between seats: people at a terminal, scripted move lists,
//! or the fixed middle-move policy.

pub mod seats;

mod session;

pub use session::{run_game, RunError, Seats};
