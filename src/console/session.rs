//! The console game loop.

use super::input::{InputError, MoveSource};
use crate::games::british_square::{GameState, MoveError};
use derive_more::{Display, Error, From};
use std::convert::Infallible;
use std::io::Write;
use tracing::{debug, info, instrument};

/// A condition that ends the game loop.
///
/// Each message already includes the inner error, so no variant reports
/// it again as a source.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// The requested move is illegal.
    #[display("Illegal move: {}", _0)]
    Move(#[error(not(source))] MoveError),

    /// No usable move could be read.
    #[display("{}", _0)]
    Input(#[error(not(source))] InputError),

    /// Writing the board or prompt failed.
    #[display("Failed to write output: {}", _0)]
    Io(#[error(not(source))] std::io::Error),
}

/// Drives one game: render, read, apply, repeat.
pub struct Session<S, W> {
    state: GameState,
    source: S,
    output: W,
    prompt: String,
}

impl<S: MoveSource, W: Write> Session<S, W> {
    /// Creates a session over `state`, reading from `source` and drawing to `output`.
    pub fn new(state: GameState, source: S, output: W, prompt: impl Into<String>) -> Self {
        Self {
            state,
            source,
            output,
            prompt: prompt.into(),
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes a blank line, the board and the prompt.
    fn draw(&mut self) -> Result<(), GameError> {
        writeln!(self.output)?;
        write!(self.output, "{}", self.state)?;
        write!(self.output, "{}", self.prompt)?;
        self.output.flush()?;
        Ok(())
    }

    /// Plays a single turn.
    ///
    /// On error nothing about the game state has changed.
    #[instrument(
        skip(self),
        fields(player = %self.state.current_player(), source = self.source.name())
    )]
    pub fn play_turn(&mut self) -> Result<(), GameError> {
        self.draw()?;
        debug!(valid = ?self.state.valid_moves(), "Waiting for move");

        let requested = self.source.next_move()?;
        let cell = usize::try_from(requested).map_err(|_| MoveError::OutOfBounds {
            index: requested,
            cells: self.state.dimensions().cells(),
        })?;

        self.state.apply_move(cell)?;
        Ok(())
    }

    /// Plays turns until something goes wrong.
    ///
    /// The game itself never ends, so this only returns an error.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Infallible, GameError> {
        info!(
            rows = self.state.dimensions().rows(),
            cols = self.state.dimensions().cols(),
            "Starting game"
        );

        loop {
            self.play_turn().inspect_err(|e| {
                debug!(error = %e, moves = self.state.history().len(), "Game aborted");
            })?;
        }
    }
}
