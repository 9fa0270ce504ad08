//! Alternating turn invariant: First, Second, First, Second, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: players alternate, First moves first, and the player to
/// move follows from the length of the history.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::First
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::First
        } else {
            Player::Second
        };

        game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (First, Second, First, ...)"
    }
}
