//! The game state machine.

use crate::contracts::{Contract, MoveContract};
use crate::{Board, DiagonalRule, GameError, Move, Outcome, Player, PlayerId, Players, rules};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Complete state of one game.
///
/// Created by [`GameState::initialize`], mutated only by
/// [`GameState::apply_move`], and read-only once an outcome is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) players: Players,
    pub(crate) current: PlayerId,
    pub(crate) next: PlayerId,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) finished: bool,
    pub(crate) rule: DiagonalRule,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Sets up a game on an empty `size`×`size` board with both diagonals
    /// counting as winning lines.
    ///
    /// The first player in `players` moves first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `size` is zero or even, or if both
    /// players share a glyph.
    pub fn initialize(size: usize, players: [Player; 2]) -> Result<Self, GameError> {
        Self::initialize_with_rule(size, players, DiagonalRule::default())
    }

    /// Same as [`GameState::initialize`] with an explicit [`DiagonalRule`].
    #[instrument(skip(players))]
    pub fn initialize_with_rule(
        size: usize,
        players: [Player; 2],
        rule: DiagonalRule,
    ) -> Result<Self, GameError> {
        let [first, second] = players;
        let players = Players::new(first, second)?;
        let board = Board::new(size)?;

        info!(
            first = %players[PlayerId::First],
            second = %players[PlayerId::Second],
            "Game initialized"
        );

        Ok(Self {
            board,
            players,
            current: PlayerId::First,
            next: PlayerId::Second,
            winner: None,
            finished: false,
            rule,
            history: Vec::new(),
        })
    }

    /// Claims `(row, col)` for the current player and passes the turn.
    ///
    /// Returns the applied move. If the move completes a line or fills the
    /// board, the game becomes finished.
    ///
    /// # Errors
    ///
    /// - `GameOver` if an outcome was already reached
    /// - `OutOfBounds` if either coordinate is `>= size`
    /// - `SquareOccupied` if the square is taken
    ///
    /// A rejected move leaves the state untouched.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Move, GameError> {
        let action = Move::new(self.current, row, col);

        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.claim(row, col, action.player)?;
        self.history.push(action);
        std::mem::swap(&mut self.current, &mut self.next);

        match self.check_outcome() {
            Outcome::Win(winner) => {
                self.winner = Some(winner);
                self.finished = true;
                info!(winner = %self.players[winner], moves = self.history.len(), "Game won");
            }
            Outcome::Draw => {
                self.finished = true;
                info!(moves = self.history.len(), "Game drawn");
            }
            Outcome::InProgress => debug!(%action, "Move applied"),
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(action)
    }

    /// Evaluates the board. Pure query.
    pub fn check_outcome(&self) -> Outcome {
        rules::evaluate(&self.board, self.rule)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board size.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Occupant of `(row, col)`, `None` if empty or off the board.
    pub fn occupant(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.board.occupant(row, col)
    }

    /// Both players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The player in the given seat.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Seat of the player whose turn it is.
    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    /// The player who moves after the current one.
    pub fn next_player(&self) -> &Player {
        &self.players[self.next]
    }

    /// Seat of the player who moves after the current one.
    pub fn next_player_id(&self) -> PlayerId {
        self.next
    }

    /// The winner, once the game has been won.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|id| &self.players[id])
    }

    /// Seat of the winner, once the game has been won.
    pub fn winner_id(&self) -> Option<PlayerId> {
        self.winner
    }

    /// True once a win or draw has been reached.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Moves applied so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Diagonal rule in effect.
    pub fn diagonal_rule(&self) -> DiagonalRule {
        self.rule
    }
}
