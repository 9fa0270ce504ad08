//! Contract-based validation for British Square.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::action::{Move, MoveError};
use super::invariants::{BritishSquareInvariants, InvariantSet};
use super::{GameState, rules};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell is on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Checks that `mov` names a cell on the board.
    #[instrument(level = "trace", skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        let dims = game.dimensions();
        if dims.contains(mov.cell) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                index: i64::try_from(mov.cell).unwrap_or(i64::MAX),
                cells: dims.cells(),
            })
        }
    }
}

/// Precondition: the cell holds no piece.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks that the cell of `mov` is empty.
    #[instrument(level = "trace", skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(mov.cell) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.cell))
        }
    }
}

/// Precondition: no orthogonal neighbour belongs to the mover's opponent.
pub struct NotAdjacentToOpponent;

impl NotAdjacentToOpponent {
    /// Checks the adjacency rule for `mov`.
    #[instrument(level = "trace", skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if rules::touches_opponent(game.board(), mov.cell, mov.player) {
            Err(MoveError::AdjacentToOpponent {
                cell: mov.cell,
                player: mov.player,
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: in bounds, empty, and away from the opponent.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in that order.
    #[instrument(level = "trace", skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        CellInBounds::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        NotAdjacentToOpponent::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placement moves.
///
/// Preconditions: [`LegalMove`].
///
/// Postconditions: every invariant in [`BritishSquareInvariants`] holds.
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        BritishSquareInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
