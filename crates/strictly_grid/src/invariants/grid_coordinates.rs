//! Grid coordinate invariant.

use super::Invariant;
use crate::GameState;

/// Invariant: the board is N rows of N squares, and each square's stored
/// coordinates match its place in the grid.
pub struct GridCoordinatesInvariant;

impl Invariant<GameState> for GridCoordinatesInvariant {
    fn holds(game: &GameState) -> bool {
        let size = game.size();
        let board = game.board();

        board.rows().count() == size
            && board.rows().enumerate().all(|(r, row)| {
                row.len() == size
                    && row
                        .iter()
                        .enumerate()
                        .all(|(c, square)| square.row() == r && square.col() == c)
            })
    }

    fn description() -> &'static str {
        "Square coordinates match their grid position"
    }
}
