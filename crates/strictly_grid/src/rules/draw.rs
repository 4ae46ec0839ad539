//! Draw detection.

use super::win::check_winner;
use crate::{Board, DiagonalRule};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().all(|s| !s.is_empty())
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board, rule: DiagonalRule) -> bool {
    is_full(board) && check_winner(board, rule).is_none()
}
