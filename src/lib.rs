//! British Square - a placement game played on the console.
//!
//! Two players take turns claiming cells of a small grid. A cell may be
//! claimed only while none of its orthogonal neighbours belongs to the
//! opponent.
//!
//! # Architecture
//!
//! - **Games**: board, rules, contracts and invariants
//! - **Console**: move sources and the render/read/apply loop
//! - **Config**: TOML game settings
//!
//! # Example
//!
//! ```
//! use british_square::{GameState, Player};
//!
//! let mut game = GameState::default();
//! game.apply_move(5).unwrap();
//!
//! assert_eq!(game.current_player(), Player::Second);
//! assert!(!game.is_valid_move(6));
//! assert!(game.is_valid_move(7));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console play
pub use console::{ConsoleInput, GameError, InputError, MoveSource, Session};

// Crate-level exports - Game types
pub use games::british_square::{
    AlternatingTurnInvariant, Board, BritishSquareInvariants, CellInBounds, CellIsEmpty,
    Contract, Dimensions, GameState, Invariant, InvariantSet, InvariantViolation, LegalMove,
    MonotonicBoardInvariant, Move, MoveContract, MoveError, NotAdjacentToOpponent,
    PlacementRuleInvariant, Player, Square,
};
