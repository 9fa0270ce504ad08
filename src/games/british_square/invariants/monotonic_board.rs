//! Monotonic board invariant: pieces never move or change owner.

use super::super::{Board, GameState, Square};
use super::Invariant;

/// Invariant: every piece on the board was placed by exactly one move,
/// on a cell that was empty at the time.
///
/// Checked by replaying the move history onto an empty board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new(game.dimensions());

        for mov in game.history() {
            if !reconstructed.is_empty(mov.cell) {
                return false;
            }
            if reconstructed.set(mov.cell, Square::Occupied(mov.player)).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
