//! Error types for the grid game core.

use derive_more::Display;

/// Why a game could not be set up.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigurationIssue {
    /// Board size of zero.
    #[display("board doesn't have a size")]
    ZeroSize,

    /// Board size that is not odd.
    #[display("board size must be odd, got {_0}")]
    EvenSize(usize),

    /// Board size above `Board::MAX_SIZE`.
    #[display("board size must be at most {}, got {}", crate::Board::MAX_SIZE, _0)]
    TooLarge(usize),

    /// Player name that is empty after trimming.
    #[display("player name must not be empty")]
    EmptyName,

    /// Player glyph that is not exactly one character.
    #[display("player glyph must be a single character, got {_0:?}")]
    GlyphNotSingle(String),

    /// Both players chose the same glyph.
    #[display("both players are represented by {_0:?}")]
    DuplicateGlyph(String),
}

/// Error returned by game setup and move application.
///
/// Every variant except `InvalidConfiguration` and `InvariantViolation` is
/// recoverable: the state is left untouched and the caller may retry.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameError {
    /// The board or the players could not be set up.
    #[display("Invalid configuration: {_0}")]
    InvalidConfiguration(ConfigurationIssue),

    /// Move coordinates fall outside the board.
    #[display("Square ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board size.
        size: usize,
    },

    /// The target square already has an occupant.
    #[display("Square ({row}, {col}) is already taken")]
    SquareOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A move was attempted after the game ended.
    #[display("Game is already over")]
    GameOver,

    /// A postcondition failed after a move was applied.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl From<ConfigurationIssue> for GameError {
    fn from(issue: ConfigurationIssue) -> Self {
        GameError::InvalidConfiguration(issue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_square() {
        let err = GameError::OutOfBounds {
            row: 3,
            col: 0,
            size: 3,
        };
        assert_eq!(err.to_string(), "Square (3, 0) is outside the 3x3 board");

        let err = GameError::SquareOccupied { row: 1, col: 2 };
        assert_eq!(err.to_string(), "Square (1, 2) is already taken");
    }

    #[test]
    fn test_issue_converts_into_invalid_configuration() {
        let err: GameError = ConfigurationIssue::EvenSize(4).into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: board size must be odd, got 4"
        );

        let err: GameError = ConfigurationIssue::TooLarge(1001).into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: board size must be at most 999, got 1001"
        );
    }
}
