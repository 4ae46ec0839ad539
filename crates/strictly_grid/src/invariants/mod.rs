//! First-class invariants for the grid game.
//!
//! Invariants are logical properties that must hold after every move.
//! They are checked by the move contract in debug builds and can be
//! tested on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        collect(violations)
    }
}

pub mod alternating_turn;
pub mod grid_coordinates;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use grid_coordinates::GridCoordinatesInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All grid game invariants as a composable set.
pub type GridInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    GridCoordinatesInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{classic_game, play};
    use crate::PlayerId;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = classic_game();
        assert!(GridInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = play(classic_game(), &[(0, 0), (1, 1), (0, 2)]);
        assert!(GridInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = play(classic_game(), &[(1, 1)]);
        // Second player appears on the board without a recorded move.
        game.board.force(0, 0, Some(PlayerId::Second));
        game.history.push(crate::Move::new(PlayerId::First, 2, 2));

        let violations = GridInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, MonotonicBoardInvariant::description());
        assert_eq!(violations[1].description, AlternatingTurnInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = classic_game();
        type TwoInvariants = (MonotonicBoardInvariant, GridCoordinatesInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
