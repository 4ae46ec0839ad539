//! Win detection on an N×N board.

use crate::{Board, DiagonalRule, PlayerId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A line of N squares that wins when one player owns all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row with the given index.
    Row(usize),
    /// Column with the given index.
    Column(usize),
    /// Squares where `row == col`.
    MainDiagonal,
    /// Squares where `row + col == size - 1`.
    AntiDiagonal,
}

impl Line {
    /// Coordinates covered by this line on a board of `size`.
    pub fn cells(self, size: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..size).map(move |i| match self {
            Line::Row(row) => (row, i),
            Line::Column(col) => (i, col),
            Line::MainDiagonal => (i, i),
            Line::AntiDiagonal => (i, size - 1 - i),
        })
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {}", row),
            Line::Column(col) => write!(f, "column {}", col),
            Line::MainDiagonal => write!(f, "main diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Candidate lines in scan order: row i and column i for each i, with the
/// diagonals checked right after row 0 and column 0.
fn lines(size: usize, rule: DiagonalRule) -> impl Iterator<Item = Line> {
    (0..size).flat_map(move |i| {
        let diagonals: &[Line] = match (i, rule) {
            (0, DiagonalRule::Both) => &[Line::MainDiagonal, Line::AntiDiagonal],
            (0, DiagonalRule::MainOnly) => &[Line::MainDiagonal],
            _ => &[],
        };
        [Line::Row(i), Line::Column(i)]
            .into_iter()
            .chain(diagonals.iter().copied())
    })
}

/// Returns the owner if every square of `line` is occupied by one player.
fn line_owner(board: &Board, line: Line) -> Option<PlayerId> {
    let mut occupants = line
        .cells(board.size())
        .map(|(row, col)| board.occupant(row, col));
    let first = occupants.next().flatten()?;
    occupants.all(|o| o == Some(first)).then_some(first)
}

/// Returns the first complete line in scan order, with its owner.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board, rule: DiagonalRule) -> Option<(Line, PlayerId)> {
    lines(board.size(), rule).find_map(|line| line_owner(board, line).map(|owner| (line, owner)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player owns a full row, column or
/// diagonal (as permitted by `rule`), `None` otherwise.
pub fn check_winner(board: &Board, rule: DiagonalRule) -> Option<PlayerId> {
    winning_line(board, rule).map(|(_, owner)| owner)
}
