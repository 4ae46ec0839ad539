//! Game outcome and the diagonal rule used to reach it.

use crate::PlayerId;
use serde::{Deserialize, Serialize};

/// Result of evaluating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winning line yet and at least one empty square.
    InProgress,
    /// A player owns a complete line.
    Win(PlayerId),
    /// Every square is taken and nobody owns a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "{} player wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Which diagonals count as winning lines.
///
/// `MainOnly` reproduces the classic console version of this game, which
/// only ever inspected the `row == col` diagonal. It exists for
/// compatibility; `Both` is the correct rule and the default.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DiagonalRule {
    /// Main diagonal and anti-diagonal.
    #[default]
    Both,
    /// Main diagonal only.
    MainOnly,
}
