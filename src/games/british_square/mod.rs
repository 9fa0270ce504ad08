//! British Square: a placement game on a small grid.
//!
//! Players take turns claiming empty cells. A cell may only be claimed if
//! none of its orthogonal neighbours hold an opponent's piece.

mod action;
mod contracts;
mod invariants;
mod position;
mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{
    CellInBounds, CellIsEmpty, Contract, LegalMove, MoveContract, NotAdjacentToOpponent,
};
pub use invariants::{
    AlternatingTurnInvariant, BritishSquareInvariants, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, PlacementRuleInvariant,
};
pub use state::GameState;
pub use types::{Board, Dimensions, Player, Square};
