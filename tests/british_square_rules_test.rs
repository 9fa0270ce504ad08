//! Tests for the British Square placement rule and move application.

use british_square::{Dimensions, GameState, MoveError, Player, Square};

#[test]
fn test_every_cell_valid_on_empty_board() {
    let game = GameState::default();
    assert_eq!(game.current_player(), Player::First);
    for cell in 0..16 {
        assert!(game.is_valid_move(cell), "cell {} should be valid", cell);
    }
}

#[test]
fn test_second_player_blocked_around_first_piece() {
    let mut game = GameState::default();
    game.apply_move(5).unwrap();

    assert_eq!(game.current_player(), Player::Second);
    let valid = game.valid_moves();
    for blocked in [1, 4, 5, 6, 9] {
        assert!(!valid.contains(&blocked), "cell {} should be blocked", blocked);
    }
    assert_eq!(valid, vec![0, 2, 3, 7, 8, 10, 11, 12, 13, 14, 15]);
}

#[test]
fn test_apply_move_occupies_cell_and_flips_turn() {
    let mut game = GameState::default();
    game.apply_move(0).unwrap();
    assert_eq!(game.board().get(0), Some(Square::Occupied(Player::First)));
    assert_eq!(game.current_player(), Player::Second);

    game.apply_move(15).unwrap();
    assert_eq!(game.board().get(15), Some(Square::Occupied(Player::Second)));
    assert_eq!(game.current_player(), Player::First);
}

#[test]
fn test_occupied_cell_never_valid() {
    let game = GameState::replay(&[0, 15]).unwrap();
    assert!(!game.is_valid_move(0));
    assert!(!game.is_valid_move(15));
    assert_eq!(game.check_move(15), Err(MoveError::CellOccupied(15)));
}

#[test]
fn test_validity_matches_adjacency_rule_everywhere() {
    let game = GameState::replay(&[5, 15, 0]).unwrap();
    let dims = game.dimensions();
    let opponent = game.current_player().opponent();

    for cell in 0..dims.cells() {
        let occupied = !game.board().is_empty(cell);
        let touches_opponent = dims
            .neighbours(cell)
            .any(|n| game.board().is_occupied_by(n, opponent));
        assert_eq!(
            game.is_valid_move(cell),
            !occupied && !touches_opponent,
            "cell {}",
            cell
        );
        assert_eq!(game.is_valid_move(cell), game.check_move(cell).is_ok());
    }
}

#[test]
fn test_rejected_move_does_not_mutate() {
    let mut game = GameState::replay(&[5]).unwrap();
    let before = game.clone();

    assert_eq!(game.apply_move(5), Err(MoveError::CellOccupied(5)));
    assert_eq!(
        game.apply_move(1),
        Err(MoveError::AdjacentToOpponent {
            cell: 1,
            player: Player::Second
        })
    );
    assert_eq!(game, before);
}

#[test]
fn test_render_is_idempotent() {
    let game = GameState::replay(&[5, 15, 2]).unwrap();
    assert_eq!(game.render(), game.render());
}

#[test]
fn test_render_marks_blocked_cells_blank() {
    let game = GameState::replay(&[5]).unwrap();
    let rendered = game.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "-----------------");
    assert_eq!(lines[1], "| . |   | . | . |");
    assert_eq!(lines[2], "|   | O |   | . |");
    assert_eq!(lines[3], "| . |   | . | . |");
    assert_eq!(lines[4], "| . | . | . | . |");
    assert_eq!(lines[5], "-----------------");
}

#[test]
fn test_custom_dimensions() {
    let mut game = GameState::new(Dimensions::new(2, 3).unwrap());
    game.apply_move(1).unwrap();
    // Second may not touch 1: its neighbours are 0, 2 and 4.
    assert_eq!(game.valid_moves(), vec![3, 5]);
    assert!(matches!(
        game.apply_move(6),
        Err(MoveError::OutOfBounds { index: 6, cells: 6 })
    ));
}
