//! Placement rule invariant: no piece was ever put next to an opponent's.

use super::super::{Board, GameState, Square, rules};
use super::Invariant;

/// Invariant: replaying the history, every move was legal when played.
pub struct PlacementRuleInvariant;

impl Invariant<GameState> for PlacementRuleInvariant {
    fn holds(game: &GameState) -> bool {
        let mut board = Board::new(game.dimensions());

        game.history().iter().all(|mov| {
            rules::is_legal(&board, mov.cell, mov.player)
                && board.set(mov.cell, Square::Occupied(mov.player)).is_ok()
        })
    }

    fn description() -> &'static str {
        "Every piece was placed away from the opponent's pieces"
    }
}
