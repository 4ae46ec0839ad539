//! Strictly Grid - two-player line game on an odd-sized square board
//!
//! The crate holds the game state machine only: board setup, move
//! validation, turn alternation and win/draw detection. Rendering and
//! input live in `strictly_grid_console`.
//!
//! # Example
//!
//! ```
//! use strictly_grid::{GameState, Outcome, Player, PlayerId};
//!
//! # fn main() -> Result<(), strictly_grid::GameError> {
//! let players = [Player::new("Ada", "X")?, Player::new("Bob", "O")?];
//! let mut game = GameState::initialize(3, players)?;
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.apply_move(row, col)?;
//! }
//!
//! assert_eq!(game.check_outcome(), Outcome::Win(PlayerId::First));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod outcome;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::Move;
pub use error::{ConfigurationIssue, GameError};
pub use game::GameState;
pub use outcome::{DiagonalRule, Outcome};
pub use rules::Line;
pub use types::{Board, Player, PlayerId, Players, Square};
