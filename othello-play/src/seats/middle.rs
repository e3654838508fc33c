use super::{Seat, SeatError};
use othello_engine::{Game, Location, MoveList};

/// Always plays the middle entry of the ordered legal-move list.
/// Deterministic, which makes it useful for demo games and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct MiddleMoveSeat;

impl Seat for MiddleMoveSeat {
    fn choose_move(&mut self, game: &Game, legal: &MoveList) -> Result<Location, SeatError> {
        legal
            .iter()
            .nth(legal.len() / 2)
            .copied()
            .ok_or(SeatError::NoLegalMove {
                side: game.to_move(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_middle_of_sorted_moves() {
        let game = Game::new();
        let legal = game.legal_moves();
        // [D3, C4, F5, E6]
        assert_eq!(
            MiddleMoveSeat.choose_move(&game, &legal).unwrap(),
            "F5".parse::<Location>().unwrap()
        );
    }
}
