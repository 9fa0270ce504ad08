//! Game state: the board, whose turn it is, and the moves played so far.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules;
use super::types::{Board, Dimensions, Player, Square};
use tracing::{debug, instrument, warn};

/// Complete game state.
///
/// Created empty with [`Player::First`] to move, then mutated in place by
/// [`GameState::apply_move`]. There is no end state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) to_move: Player,
    pub(super) history: Vec<Move>,
}

impl GameState {
    /// Creates an empty game on a board of the given size.
    #[instrument]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            board: Board::new(dimensions),
            to_move: Player::First,
            history: Vec::new(),
        }
    }

    /// Plays `cells` in order from an empty standard board.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::default();
        for &cell in cells {
            game.apply_move(cell)?;
        }
        Ok(game)
    }

    /// Returns the board dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns the moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true if the player to move may place on `cell`.
    pub fn is_valid_move(&self, cell: usize) -> bool {
        rules::is_legal(&self.board, cell, self.to_move)
    }

    /// Like [`GameState::is_valid_move`], but says why a move is refused.
    #[instrument(level = "debug", skip(self), fields(player = %self.to_move))]
    pub fn check_move(&self, cell: usize) -> Result<(), MoveError> {
        MoveContract::pre(self, &Move::new(self.to_move, cell))
    }

    /// Every cell the player to move may place on, ascending.
    pub fn valid_moves(&self) -> Vec<usize> {
        rules::legal_cells(&self.board, self.to_move)
    }

    /// Places the current player's piece on `cell` and passes the turn.
    ///
    /// A refused move leaves the state untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, cell: usize) -> Result<(), MoveError> {
        let action = Move::new(self.to_move, cell);
        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Move refused");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board
            .set(cell, Square::Occupied(action.player))
            .map_err(|e| MoveError::InvariantViolation(e.to_string()))?;
        self.history.push(action);
        self.to_move = action.player.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        debug!(%action, next = %self.to_move, "Move applied");
        Ok(())
    }

    /// Draws the board.
    ///
    /// Pieces show as `O` (first player) and `X` (second player); empty
    /// cells the player to move could take show as `.`.
    pub fn render(&self) -> String {
        let dims = self.dimensions();
        let rule = format!("-{}", "----".repeat(dims.cols()));

        let mut out = String::with_capacity((rule.len() + 1) * (dims.rows() + 2));
        out.push_str(&rule);
        out.push('\n');

        for row in 0..dims.rows() {
            out.push('|');
            for cell in (0..dims.cols()).filter_map(|col| dims.index(row, col)) {
                let mark = match self.board.get(cell) {
                    Some(Square::Occupied(player)) => player.marker(),
                    _ if self.is_valid_move(cell) => '.',
                    _ => ' ',
                };
                out.push(' ');
                out.push(mark);
                out.push_str(" |");
            }
            out.push('\n');
        }

        out.push_str(&rule);
        out.push('\n');
        out
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Dimensions::STANDARD)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
