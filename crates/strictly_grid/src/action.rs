//! First-class move records.
//!
//! A move is built from the current player and the requested coordinates
//! before it is applied, so contracts can inspect it independently of
//! execution.

use crate::PlayerId;
use serde::{Deserialize, Serialize};

/// A player claiming the square at `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Seat of the player making the move.
    pub player: PlayerId,
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: PlayerId, row: usize, col: usize) -> Self {
        Self { player, row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.row, self.col)
    }
}
