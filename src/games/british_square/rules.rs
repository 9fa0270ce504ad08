//! Placement rule for British Square.
//!
//! A piece may go on any empty cell that has no orthogonal neighbour
//! belonging to the opponent. Nothing is ever captured or flipped.

use super::types::{Board, Player};
use tracing::instrument;

/// Returns true if any in-bounds orthogonal neighbour of `cell` holds a
/// piece of `player`'s opponent.
#[instrument(level = "trace", skip(board))]
pub fn touches_opponent(board: &Board, cell: usize, player: Player) -> bool {
    let opponent = player.opponent();
    board
        .dimensions()
        .neighbours(cell)
        .any(|n| board.is_occupied_by(n, opponent))
}

/// Returns true if `player` may place a piece on `cell`.
///
/// Fails closed for out-of-bounds and occupied cells.
#[instrument(level = "trace", skip(board))]
pub fn is_legal(board: &Board, cell: usize, player: Player) -> bool {
    board.is_empty(cell) && !touches_opponent(board, cell, player)
}

/// Every cell `player` may place on, ascending.
#[instrument(level = "trace", skip(board))]
pub fn legal_cells(board: &Board, player: Player) -> Vec<usize> {
    (0..board.dimensions().cells())
        .filter(|&cell| is_legal(board, cell, player))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::british_square::{Dimensions, Square};

    #[test]
    fn test_empty_board_all_legal() {
        let board = Board::default();
        assert_eq!(legal_cells(&board, Player::First).len(), 16);
        assert_eq!(legal_cells(&board, Player::Second).len(), 16);
    }

    #[test]
    fn test_own_pieces_do_not_block() {
        let mut board = Board::default();
        board.set(5, Square::Occupied(Player::First)).unwrap();

        for cell in [1, 4, 6, 9] {
            assert!(is_legal(&board, cell, Player::First));
            assert!(!is_legal(&board, cell, Player::Second));
        }
        assert!(!is_legal(&board, 5, Player::First));
    }

    #[test]
    fn test_diagonal_does_not_block() {
        let mut board = Board::default();
        board.set(5, Square::Occupied(Player::Second)).unwrap();

        for cell in [0, 2, 8, 10] {
            assert!(is_legal(&board, cell, Player::First));
        }
    }

    #[test]
    fn test_out_of_bounds_is_illegal() {
        let board = Board::new(Dimensions::new(2, 2).unwrap());
        assert!(!is_legal(&board, 4, Player::First));
    }
}
