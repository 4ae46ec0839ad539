//! Alternating turn invariant: seats alternate First, Second, First, ...

use super::Invariant;
use crate::{GameState, PlayerId};

/// Invariant: players alternate turns.
///
/// The k-th recorded move belongs to `PlayerId::for_turn(k)`, and the
/// player on turn is the one due for the next move. Current and next are
/// always different seats.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let ordered = game
            .history()
            .iter()
            .enumerate()
            .all(|(turn, mov)| mov.player == PlayerId::for_turn(turn));

        ordered
            && game.current_player_id() == PlayerId::for_turn(game.history().len())
            && game.next_player_id() == game.current_player_id().opponent()
    }

    fn description() -> &'static str {
        "Players alternate turns (First, Second, First, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{classic_game, play};
    use crate::Move;

    #[test]
    fn test_empty_game_holds() {
        let game = classic_game();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_player_id(), PlayerId::First);
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = play(classic_game(), &[(0, 0), (1, 1), (2, 0), (0, 2)]);
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_player_id(), PlayerId::First);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = play(classic_game(), &[(0, 0)]);
        game.history.push(Move::new(PlayerId::First, 1, 1));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_unswapped_turn_violates() {
        let mut game = play(classic_game(), &[(0, 0)]);
        game.current = PlayerId::First;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
