use super::{Seat, SeatError};
use othello_engine::{Game, Location, MoveList};
use std::io::{BufRead, Write};

/// Reads moves typed by a person.
///
/// Accepts `D3` notation or a 0-indexed `row col` pair. `moves` lists the
/// legal moves again and `quit` resigns.
pub struct TerminalSeat<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalSeat<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

/// Parse a typed move: "D3" notation, or "row col" with 0-indexed coordinates.
pub fn parse_move(text: &str) -> Option<Location> {
    let text = text.trim();
    if let Ok(location) = text.parse() {
        return Some(location);
    }

    let mut parts = text.split(|c: char| c.is_whitespace() || c == ',');
    let row = parts.next()?.trim().parse().ok()?;
    let col = parts.find(|part| !part.is_empty())?.trim().parse().ok()?;
    if parts.any(|part| !part.is_empty()) {
        return None;
    }
    Location::from_coords(row, col)
}

impl<R: BufRead, W: Write> Seat for TerminalSeat<R, W> {
    fn choose_move(&mut self, game: &Game, legal: &MoveList) -> Result<Location, SeatError> {
        let side = game.to_move();
        let name = game.player(side).map_or(side.name(), |player| player.name());

        loop {
            write!(self.output, "{} ({}) to move: ", name, side)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SeatError::InputClosed { side });
            }

            match line.trim() {
                "quit" => return Err(SeatError::Resigned { side }),
                "moves" => writeln!(self.output, "Legal moves: {}", legal)?,
                text => match parse_move(text) {
                    Some(location) if legal.contains(location) => return Ok(location),
                    Some(_) => writeln!(self.output, "Invalid move. Legal moves: {}", legal)?,
                    None => writeln!(self.output, "Cannot parse move.")?,
                },
            }
        }
    }
}
