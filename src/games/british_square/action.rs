//! First-class action types for British Square.
//!
//! A move is a domain event: a player claiming a cell. It can be
//! validated against a state before it is applied.

use super::Player;

/// A placement: `player` puts a piece on `cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Row-major index of the claimed cell.
    pub cell: usize,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the claimed cell.
    pub fn cell(&self) -> usize {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is off the board (valid cells are 0-{})", index, cells - 1)]
    OutOfBounds {
        /// The requested index, as typed.
        index: i64,
        /// Number of cells on the board.
        cells: usize,
    },

    /// The cell already holds a piece.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The cell touches one of the opponent's pieces.
    #[display("Cell {} is next to a piece of {}'s opponent", cell, player)]
    AdjacentToOpponent {
        /// The refused cell.
        cell: usize,
        /// The player who tried to move there.
        player: Player,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
