//! Contract-based validation for moves.
//!
//! Preconditions run before every move and decide whether it is legal.
//! Postconditions run after the move in debug builds and verify that the
//! transition kept every state invariant.

use crate::invariants::{GridInvariants, InvariantSet};
use crate::{GameError, GameState, Move};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: no outcome has been reached yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameOver` once the game is finished.
    pub fn check(game: &GameState) -> Result<(), GameError> {
        if game.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the coordinates lie on the board.
pub struct WithinBounds;

impl WithinBounds {
    /// Fails with `OutOfBounds` if either coordinate is `>= size`.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), GameError> {
        if game.board().contains(mov.row, mov.col) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                row: mov.row,
                col: mov.col,
                size: game.size(),
            })
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `SquareOccupied` if someone already owns the square.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), GameError> {
        match game.occupant(mov.row, mov.col) {
            Some(_) => Err(GameError::SquareOccupied {
                row: mov.row,
                col: mov.col,
            }),
            None => Ok(()),
        }
    }
}

/// Composite precondition, checked in the order the errors are reported.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), GameError> {
        GameNotOver::check(game)?;
        WithinBounds::check(mov, game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions:
/// - exactly one more square is filled
/// - current and next player swapped
/// - every [`GridInvariants`] member holds
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), GameError> {
        LegalMove::check(action, game)
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        if after.board().filled() != before.board().filled() + 1 {
            warn!("Move did not fill exactly one square");
            return Err(GameError::InvariantViolation(
                "Postcondition failed: exactly one square is claimed per move".to_string(),
            ));
        }

        if after.current_player_id() != before.next_player_id() {
            warn!("Turn did not pass to the next player");
            return Err(GameError::InvariantViolation(
                "Postcondition failed: turn passes to the next player".to_string(),
            ));
        }

        GridInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariants violated after move");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
