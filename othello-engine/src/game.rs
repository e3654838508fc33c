//! Implements session-level Othello logic.
//!
//! [`Board`] answers questions about one position. [`Game`] adds the people
//! playing it, whose turn it is, passing, and the final result.

use crate::{Board, IllegalMove, InvalidSide, Location, MoveList, Outcome, Placement, Side};
use derive_more::{Display, Error};
use std::fmt;

/// A named participant seated on one side.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Player {
    name: String,
    side: Side,
}

impl Player {
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self {
            name: name.into(),
            side,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }
}

/// One entry in a game's history.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Turn {
    Placed(Placement),
    /// The side had no legal move and its turn was skipped.
    Passed(Side),
}

#[derive(Clone, Debug, Eq, PartialEq, Display, Error)]
pub enum GameError {
    #[display(fmt = "{}", source)]
    InvalidSide { source: InvalidSide },
    #[display(fmt = "a game has at most two players")]
    TooManyPlayers,
    #[display(fmt = "{} already has a player", side)]
    SideTaken { side: Side },
    #[display(fmt = "it is {}'s turn, not {}'s", expected, side)]
    OutOfTurn { side: Side, expected: Side },
    #[display(fmt = "{}; legal moves: {}", source, legal)]
    IllegalMove { source: IllegalMove, legal: MoveList },
    #[display(fmt = "the game is already over")]
    Finished,
}

impl From<InvalidSide> for GameError {
    fn from(source: InvalidSide) -> Self {
        GameError::InvalidSide { source }
    }
}

/// A game in progress: the board, its players and the turn history.
///
/// Turns strictly alternate, except that a side with no legal move passes
/// automatically. The game ends when the board is full or neither side can move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    to_move: Side,
    history: Vec<Turn>,
    outcome: Option<Outcome>,
}

impl Default for Game {
    /// Gets the starting position with black to move.
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Board::new(), Side::default())
    }

    /// Start from an arbitrary position with `to_move` to play.
    /// Passes or the end of the game are applied immediately if the position calls for them.
    pub fn from_position(board: Board, to_move: Side) -> Self {
        let mut game = Self {
            board,
            players: Vec::new(),
            to_move,
            history: Vec::new(),
            outcome: None,
        };
        game.settle();
        game
    }

    /// Seat a player on the side named by `color` ("white", "BLACK", ...).
    pub fn create_player(&mut self, name: &str, color: &str) -> Result<&Player, GameError> {
        let side: Side = color.parse()?;
        if self.players.len() == 2 {
            return Err(GameError::TooManyPlayers);
        }
        if self.player(side).is_some() {
            return Err(GameError::SideTaken { side });
        }

        let index = self.players.len();
        self.players.push(Player::new(name, side));
        Ok(&self.players[index])
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player seated on `side`, if any.
    pub fn player(&self, side: Side) -> Option<&Player> {
        self.players.iter().find(|player| player.side == side)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> MoveList {
        if self.is_finished() {
            return MoveList::default();
        }
        self.board.legal_moves(self.to_move)
    }

    /// Legal moves for the side named by `color`, whoever is to move.
    pub fn available_positions(&self, color: &str) -> Result<MoveList, GameError> {
        let side: Side = color.parse()?;
        Ok(self.board.legal_moves(side))
    }

    /// Play `location` for `side`, then pass for the opponent or end the game as needed.
    pub fn play(&mut self, side: Side, location: Location) -> Result<Placement, GameError> {
        if self.is_finished() {
            return Err(GameError::Finished);
        }
        if side != self.to_move {
            return Err(GameError::OutOfTurn {
                side,
                expected: self.to_move,
            });
        }

        let placement =
            self.board
                .apply_move(side, location)
                .map_err(|source| GameError::IllegalMove {
                    source,
                    legal: self.board.legal_moves(side),
                })?;

        self.history.push(Turn::Placed(placement.clone()));
        self.to_move = !side;
        self.settle();
        Ok(placement)
    }

    /// Skip a side that cannot move, or finish the game.
    fn settle(&mut self) {
        if self.board.is_game_over() {
            self.outcome = self.board.winner();
            return;
        }
        if !self.board.legal_moves(self.to_move).is_empty() {
            return;
        }
        if self.board.legal_moves(!self.to_move).is_empty() {
            self.outcome = Some(self.board.leader());
            return;
        }

        self.history.push(Turn::Passed(self.to_move));
        self.to_move = !self.to_move;
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Announce the result by player name: "Winner is black player: Barry" or "It's a tie".
    pub fn result_message(&self) -> Option<String> {
        let message = match self.outcome? {
            Outcome::Tie => "It's a tie".to_string(),
            Outcome::Winner(side) => format!(
                "Winner is {} player: {}",
                side.name(),
                self.player(side).map_or(side.name(), Player::name)
            ),
        };
        Some(message)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(
            f,
            "Black {} - White {}",
            self.board.count_pieces(Side::Black),
            self.board.count_pieces(Side::White)
        )?;
        match self.outcome {
            Some(outcome) => write!(f, " (game over: {})", outcome),
            None => write!(f, " ({} to move)", self.to_move),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> Location {
        Location::from_coords(row, col).unwrap()
    }

    fn position(rows: &str) -> Board {
        rows.parse().unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.to_move(), Side::Black);
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
        assert!(game.players().is_empty());
        assert!(!game.is_finished());
        assert_eq!(game.legal_moves().len(), 4);
    }

    #[test]
    fn players_are_per_game() {
        let mut first = Game::new();
        first.create_player("Wilson", "white").unwrap();
        first.create_player("Barry", "bLaCk").unwrap();

        let second = Game::new();
        assert!(second.players().is_empty());
        assert_eq!(first.player(Side::Black).map(Player::name), Some("Barry"));
        assert_eq!(first.player(Side::White).map(Player::name), Some("Wilson"));
    }

    #[test]
    fn create_player_errors() {
        let mut game = Game::new();
        assert!(matches!(
            game.create_player("Leo", "green"),
            Err(GameError::InvalidSide { .. })
        ));
        game.create_player("Helen", "white").unwrap();
        assert_eq!(
            game.create_player("Leo", "WHITE"),
            Err(GameError::SideTaken { side: Side::White })
        );
        game.create_player("Leo", "black").unwrap();
        assert_eq!(
            game.create_player("Third", "black"),
            Err(GameError::TooManyPlayers)
        );
    }

    #[test]
    fn available_positions_rejects_unknown_color() {
        let game = Game::new();
        let before = game.clone();
        let err = game.available_positions("green").unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidSide {
                source: InvalidSide {
                    name: "green".to_string()
                }
            }
        );
        assert_eq!(game, before);
        assert_eq!(
            game.available_positions("whIte").unwrap(),
            Board::new().legal_moves(Side::White)
        );
    }

    #[test]
    fn play_alternates_turns() {
        let mut game = Game::new();
        let placement = game.play(Side::Black, loc(2, 3)).unwrap();
        assert_eq!(placement.flipped, vec![loc(3, 3)]);
        assert_eq!(game.to_move(), Side::White);
        assert_eq!(
            game.play(Side::Black, loc(2, 2)),
            Err(GameError::OutOfTurn {
                side: Side::Black,
                expected: Side::White
            })
        );
        game.play(Side::White, loc(2, 2)).unwrap();
        assert_eq!(game.to_move(), Side::Black);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn play_rejects_illegal_move_with_legal_list() {
        let mut game = Game::new();
        let before = game.clone();
        let err = game.play(Side::Black, loc(0, 0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "A1 is not a legal move for Black; legal moves: [D3, C4, F5, E6]"
        );
        assert_eq!(game, before);
    }

    #[test]
    fn opponent_without_moves_passes() {
        // Black A1 captures B1; white is left with a single stranded piece.
        let mut game = Game::from_position(
            position(&format!(".OX..OXX{}", ".".repeat(56))),
            Side::Black,
        );
        assert_eq!(game.legal_moves().as_slice(), &[loc(0, 0), loc(0, 4)]);

        game.play(Side::Black, loc(0, 0)).unwrap();
        assert_eq!(game.history().last(), Some(&Turn::Passed(Side::White)));
        assert_eq!(game.to_move(), Side::Black);
        assert!(!game.is_finished());

        // Capturing the last white piece leaves neither side a move.
        game.play(Side::Black, loc(0, 4)).unwrap();
        assert!(game.is_finished());
        assert_eq!(game.outcome(), Some(Outcome::Winner(Side::Black)));
        assert!(!game.board().is_game_over());
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.play(Side::White, loc(0, 3)), Err(GameError::Finished));
    }

    #[test]
    fn blocked_position_finishes_immediately() {
        let game = Game::from_position(position(&format!("XX{}", ".".repeat(62))), Side::White);
        assert_eq!(game.outcome(), Some(Outcome::Winner(Side::Black)));
        assert!(game.history().is_empty());
    }

    #[test]
    fn filling_the_board_ends_the_game() {
        // One empty square left; white fills it and captures along the last row.
        let rows = format!("{}{}{}", "XO".repeat(24), "XXXXXXOO", "OXXXXXX.");
        let mut game = Game::from_position(position(&rows), Side::White);
        game.create_player("Wilson", "white").unwrap();
        game.create_player("Barry", "black").unwrap();

        let placement = game.play(Side::White, loc(7, 7)).unwrap();
        assert_eq!(placement.flipped.len(), 6);
        assert!(game.board().is_game_over());
        assert_eq!(game.outcome(), game.board().winner());
        assert_eq!(game.outcome(), Some(Outcome::Winner(Side::White)));
        assert_eq!(
            game.result_message().as_deref(),
            Some("Winner is white player: Wilson")
        );
    }

    #[test]
    fn result_message_without_players() {
        let tie = Game::from_position(position(&"XO".repeat(32)), Side::Black);
        assert_eq!(tie.result_message().as_deref(), Some("It's a tie"));

        let black = Game::from_position(position(&"X".repeat(64)), Side::Black);
        assert_eq!(
            black.result_message().as_deref(),
            Some("Winner is black player: black")
        );
        assert_eq!(Game::new().result_message(), None);
    }

    #[test]
    fn game_display() {
        let text = Game::new().to_string();
        assert!(text.starts_with("  A B C D E F G H\n"));
        assert!(text.ends_with("Black 2 - White 2 (Black to move)"));
    }
}
