//! Game rules for the grid game.
//!
//! Pure functions that evaluate a board. They never mutate state, so the
//! same checks back both `GameState::check_outcome` and the move contract.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner, winning_line};

use crate::{Board, DiagonalRule, Outcome};
use tracing::instrument;

/// Evaluates the board into an [`Outcome`].
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board, rule: DiagonalRule) -> Outcome {
    if let Some(winner) = check_winner(board, rule) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
