//! Core domain types: players, squares and the board.

use crate::error::{ConfigurationIssue, GameError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::instrument;

/// Seat of a player in a game, in registration order.
///
/// Squares hold a `PlayerId` rather than the player itself; the
/// [`Players`] pair owns the actual names and glyphs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum PlayerId {
    /// First registered player (moves first).
    First,
    /// Second registered player.
    Second,
}

impl PlayerId {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Returns the seat expected to make the move with the given ordinal.
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 {
            PlayerId::First
        } else {
            PlayerId::Second
        }
    }
}

/// A participant: display name plus the single glyph drawn on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// Single-character board representation.
    glyph: String,
}

impl Player {
    /// Creates a player, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the name is empty or the glyph is
    /// not exactly one character.
    #[instrument(skip(name, glyph))]
    pub fn new(name: impl Into<String>, glyph: impl Into<String>) -> Result<Self, GameError> {
        let name = name.into().trim().to_string();
        let glyph = glyph.into().trim().to_string();

        if name.is_empty() {
            return Err(ConfigurationIssue::EmptyName.into());
        }
        if glyph.chars().count() != 1 {
            return Err(ConfigurationIssue::GlyphNotSingle(glyph).into());
        }

        Ok(Self { name, glyph })
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.glyph)
    }
}

/// The two players of a game, indexed by [`PlayerId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Players([Player; 2]);

impl Players {
    /// Pairs two players in registration order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if both players share a glyph.
    pub fn new(first: Player, second: Player) -> Result<Self, GameError> {
        if first.glyph == second.glyph {
            return Err(ConfigurationIssue::DuplicateGlyph(first.glyph).into());
        }
        Ok(Players([first, second]))
    }

    /// Iterates over `(seat, player)` in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        [PlayerId::First, PlayerId::Second]
            .into_iter()
            .zip(self.0.iter())
    }
}

impl Index<PlayerId> for Players {
    type Output = Player;

    fn index(&self, index: PlayerId) -> &Self::Output {
        match index {
            PlayerId::First => &self.0[0],
            PlayerId::Second => &self.0[1],
        }
    }
}

/// One cell of the board.
///
/// Coordinates are fixed at construction. The occupant goes from `None`
/// to `Some` exactly once and is never cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: usize,
    col: usize,
    occupant: Option<PlayerId>,
}

impl Square {
    fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            occupant: None,
        }
    }

    /// Row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Seat of the occupying player, if any.
    pub fn occupant(&self) -> Option<PlayerId> {
        self.occupant
    }

    /// Checks if nobody has claimed this square yet.
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Square grid of odd size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Rows of squares, `squares[row][col]`.
    squares: Vec<Vec<Square>>,
}

impl Board {
    /// Largest accepted size. Beyond this the grid would not fit in memory
    /// long before it stopped being playable.
    pub const MAX_SIZE: usize = 999;

    /// Builds an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for a zero or even size, or one above
    /// [`Board::MAX_SIZE`]. No board is allocated in that case.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(ConfigurationIssue::ZeroSize.into());
        }
        if size % 2 == 0 {
            return Err(ConfigurationIssue::EvenSize(size).into());
        }
        if size > Self::MAX_SIZE {
            return Err(ConfigurationIssue::TooLarge(size).into());
        }

        let squares = (0..size)
            .map(|row| (0..size).map(|col| Square::empty(row, col)).collect())
            .collect();

        Ok(Self { size, squares })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the square at `(row, col)`, or `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<&Square> {
        self.squares.get(row)?.get(col)
    }

    /// Returns the occupant at `(row, col)`. Empty and out-of-range squares
    /// both yield `None`.
    pub fn occupant(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.get(row, col).and_then(Square::occupant)
    }

    /// Checks that `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Rows of squares in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.iter().map(Vec::as_slice)
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().flatten()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares().filter(|s| !s.is_empty()).count()
    }

    /// Gives `(row, col)` to `player`.
    ///
    /// Fails without touching the board if the square is off the grid or
    /// already taken.
    pub(crate) fn claim(
        &mut self,
        row: usize,
        col: usize,
        player: PlayerId,
    ) -> Result<(), GameError> {
        let size = self.size;
        let square = self
            .squares
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(GameError::OutOfBounds { row, col, size })?;

        if square.occupant.is_some() {
            return Err(GameError::SquareOccupied { row, col });
        }

        square.occupant = Some(player);
        Ok(())
    }

    /// Overwrites a square without any checks, for corrupting state in tests.
    #[cfg(test)]
    pub(crate) fn force(&mut self, row: usize, col: usize, occupant: Option<PlayerId>) {
        self.squares[row][col].occupant = occupant;
    }
}
