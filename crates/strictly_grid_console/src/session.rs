//! Interactive console session: player registration and the game loop.

use crate::input::{parse_coordinates, read_line};
use crate::render::render_board;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_grid::{GameState, Outcome, Player};
use tracing::{debug, info, instrument};

/// Drives a game over a line-based reader and a writer.
///
/// Stdin/stdout in the binary, in-memory buffers in tests.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a new session.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        read_line(&mut self.input)?.context("Input closed before the game finished")
    }

    /// Asks for both players' names and glyphs.
    ///
    /// Invalid entries are reported and the seat is asked again.
    #[instrument(skip(self))]
    pub fn register_players(&mut self) -> Result<[Player; 2]> {
        let first = self.register_seat(1, None)?;
        let second = self.register_seat(2, Some(&first))?;
        info!(first = %first, second = %second, "Players registered");
        Ok([first, second])
    }

    fn register_seat(&mut self, number: usize, taken: Option<&Player>) -> Result<Player> {
        loop {
            let name = self.prompt(&format!("Player {} name: ", number))?;
            let glyph = self.prompt(&format!("{} represents: ", name.trim()))?;

            match Player::new(name, glyph) {
                Ok(player) if taken.is_some_and(|t| t.glyph() == player.glyph()) => {
                    writeln!(self.output, "{} is already taken", player.glyph())?;
                }
                Ok(player) => return Ok(player),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Runs the loop until the game is won or drawn.
    ///
    /// Each round renders the board, stops on a terminal outcome, and
    /// otherwise asks the current player for a move. Bad input and rejected
    /// moves are reported and the same player is asked again.
    ///
    /// # Errors
    ///
    /// Fails if the input ends or the writer fails.
    #[instrument(skip_all, fields(size = game.size()))]
    pub fn play(&mut self, game: &mut GameState) -> Result<Outcome> {
        loop {
            write!(self.output, "{}", render_board(game))?;

            let outcome = game.check_outcome();
            if outcome.is_terminal() {
                self.announce(game, outcome)?;
                return Ok(outcome);
            }

            let line = self.prompt(&format!(
                "{} enter position in format: x y: ",
                game.current_player().name()
            ))?;

            let (row, col) = match parse_coordinates(&line) {
                Ok(coords) => coords,
                Err(e) => {
                    debug!(error = %e, input = %line, "Unparseable move");
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            if let Err(e) = game.apply_move(row, col) {
                writeln!(self.output, "{}", e)?;
            }
        }
    }

    fn announce(&mut self, game: &GameState, outcome: Outcome) -> Result<()> {
        writeln!(self.output, "Game finished")?;
        match outcome {
            Outcome::Win(id) => {
                let winner = game.player(id);
                writeln!(
                    self.output,
                    "Winner {} who represents {}",
                    winner.name(),
                    winner.glyph()
                )?;
            }
            Outcome::Draw => writeln!(self.output, "Draw, no squares left")?,
            Outcome::InProgress => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> ConsoleSession<Cursor<String>, Vec<u8>> {
        ConsoleSession::new(Cursor::new(script.to_string()), Vec::new())
    }

    fn output(session: ConsoleSession<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).expect("utf-8 output")
    }

    #[test]
    fn test_register_players_retries_bad_seats() {
        let mut session = session("Ada\nXX\nAda\nX\nBob\nX\nBob\nO\n");
        let [ada, bob] = session.register_players().expect("players registered");
        assert_eq!((ada.name().as_str(), ada.glyph().as_str()), ("Ada", "X"));
        assert_eq!((bob.name().as_str(), bob.glyph().as_str()), ("Bob", "O"));

        let out = output(session);
        assert!(out.contains("player glyph must be a single character"));
        assert!(out.contains("X is already taken"));
        assert!(out.contains("Player 2 name: Bob represents: "));
    }

    #[test]
    fn test_register_players_fails_on_closed_input() {
        let mut session = session("Ada\n");
        assert!(session.register_players().is_err());
    }
}
