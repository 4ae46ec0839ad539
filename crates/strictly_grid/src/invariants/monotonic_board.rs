//! Monotonic board invariant: squares never change once claimed.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never hit an
/// occupied square and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let Ok(mut reconstructed) = Board::new(game.size()) else {
            return false;
        };

        for mov in game.history() {
            if reconstructed.claim(mov.row, mov.col, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
