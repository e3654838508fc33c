//! Runs a [`Game`] to the end, one seat turn at a time.

use crate::seats::{Seat, SeatError};
use derive_more::{Display, Error};
use othello_engine::{Game, GameError, Outcome, Side, Turn};
use std::io::{self, Write};

/// Who plays each side: one seat per side, or a single seat playing both.
pub enum Seats {
    Each {
        black: Box<dyn Seat>,
        white: Box<dyn Seat>,
    },
    Both(Box<dyn Seat>),
}

impl Seats {
    fn for_side(&mut self, side: Side) -> &mut dyn Seat {
        match self {
            Seats::Each { black, .. } if side == Side::Black => black.as_mut(),
            Seats::Each { white, .. } => white.as_mut(),
            Seats::Both(seat) => seat.as_mut(),
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum RunError {
    #[display(fmt = "{}", source)]
    Seat { source: SeatError },
    #[display(fmt = "{}", source)]
    Game { source: GameError },
    #[display(fmt = "failed to write game report: {}", source)]
    Io { source: io::Error },
}

impl From<SeatError> for RunError {
    fn from(source: SeatError) -> Self {
        RunError::Seat { source }
    }
}

impl From<GameError> for RunError {
    fn from(source: GameError) -> Self {
        RunError::Game { source }
    }
}

impl From<io::Error> for RunError {
    fn from(source: io::Error) -> Self {
        RunError::Io { source }
    }
}

/// Play `game` until it is over, asking the seat of the side to move for every placement.
///
/// Each move and automatic pass is reported to `out`, followed by the final
/// board and the result. With `verbose`, the board is also dumped after every move.
pub fn run_game<W: Write>(
    game: &mut Game,
    seats: &mut Seats,
    out: &mut W,
    verbose: bool,
) -> Result<Outcome, RunError> {
    writeln!(out, "{}\n", game)?;

    loop {
        if let Some(outcome) = game.outcome() {
            writeln!(out, "\n{}", game)?;
            if let Some(message) = game.result_message() {
                writeln!(out, "{}", message)?;
            }
            return Ok(outcome);
        }

        let side = game.to_move();
        let legal = game.legal_moves();
        let location = seats.for_side(side).choose_move(game, &legal)?;

        let seen = game.history().len();
        let placement = game.play(side, location)?;
        writeln!(
            out,
            "{} plays {}, flipping {}",
            side,
            placement.location,
            placement.flipped.len()
        )?;

        // Anything after our own placement is an automatic pass.
        for turn in game.history().iter().skip(seen + 1) {
            if let Turn::Passed(passed) = turn {
                writeln!(out, "{} has no legal move and passes", passed)?;
            }
        }

        if verbose {
            writeln!(out, "{}\n", game.board())?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seats::{MiddleMoveSeat, ScriptedSeat};
    use othello_engine::{Board, Location};

    fn script(moves: &[&str]) -> ScriptedSeat {
        ScriptedSeat::new(moves.iter().map(|mv| mv.parse::<Location>().unwrap()))
    }

    #[test]
    fn autoplay_runs_to_the_end() {
        let mut game = Game::new();
        game.create_player("Wilson", "white").unwrap();
        game.create_player("Barry", "black").unwrap();
        let mut seats = Seats::Both(Box::new(MiddleMoveSeat));
        let mut out = Vec::new();

        let outcome = run_game(&mut game, &mut seats, &mut out, false).unwrap();

        assert!(game.is_finished());
        assert_eq!(Some(outcome), game.outcome());
        assert_eq!(outcome, game.board().leader());

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Black plays F5, flipping 1\n"));
        let message = game.result_message().unwrap();
        assert!(report.trim_end().ends_with(&message));
    }

    #[test]
    fn scripted_game_stops_when_script_runs_out() {
        let mut game = Game::new();
        let mut seats = Seats::Both(Box::new(script(&["D3", "C3", "C4", "C5"])));
        let mut out = Vec::new();

        let err = run_game(&mut game, &mut seats, &mut out, true).unwrap_err();
        assert!(matches!(
            err,
            RunError::Seat {
                source: SeatError::ScriptExhausted { side: Side::Black }
            }
        ));
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.board().count_pieces(Side::Black), 3);
        assert_eq!(game.board().count_pieces(Side::White), 5);

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("White plays C3, flipping 1\n"));
        assert!(report.contains("White plays C5, flipping 2\n"));
    }

    #[test]
    fn scripted_game_rejects_illegal_move() {
        let mut game = Game::new();
        let mut seats = Seats::Both(Box::new(script(&["D3", "D3"])));

        let err = run_game(&mut game, &mut seats, &mut io::sink(), false).unwrap_err();
        assert!(matches!(
            err,
            RunError::Game {
                source: GameError::IllegalMove { .. }
            }
        ));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn separate_seats_and_reported_passes() {
        // Black's first move strands white's only piece.
        let board: Board = format!(".OX..OXX{}", ".".repeat(56)).parse().unwrap();
        let mut game = Game::from_position(board, Side::Black);
        let mut seats = Seats::Each {
            black: Box::new(script(&["A1", "E1"])),
            white: Box::new(script(&[])),
        };
        let mut out = Vec::new();

        let outcome = run_game(&mut game, &mut seats, &mut out, false).unwrap();
        assert_eq!(outcome, Outcome::Winner(Side::Black));

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("White has no legal move and passes\n"));
        assert!(report.trim_end().ends_with("Winner is black player: black"));
    }
}
