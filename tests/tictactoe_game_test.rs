//! Tests for the tic-tac-toe engine: moves, rewind, and truncation.

use rewind_games::{check_winner, is_full, Game, MoveError, Player, Position, Square, Status};

#[test]
fn test_fresh_game_has_single_snapshot() {
    let game = Game::new();

    assert_eq!(game.len(), 1);
    assert_eq!(game.current_step(), 0);
    assert_eq!(game.current().to_move(), Player::X);
    assert!(game
        .current()
        .board()
        .squares()
        .iter()
        .all(|s| *s == Square::Empty));
    assert_eq!(game.status(), Status::NextPlayer(Player::X));
}

#[test]
fn test_first_move_places_x_and_passes_turn() {
    let mut game = Game::new();
    game.make_move_at(0).expect("Valid move");

    assert_eq!(game.len(), 2);
    assert_eq!(game.current_step(), 1);
    assert_eq!(
        game.current().board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
    assert_eq!(game.current().to_move(), Player::O);
    assert_eq!(game.status().to_string(), "Next player: O");
}

#[test]
fn test_history_grows_by_one_per_move() {
    let mut game = Game::new();
    for index in [0, 1, 4, 2, 7] {
        game.make_move_at(index).expect("Valid move");
    }

    assert_eq!(game.len(), 6);
    assert_eq!(game.current_step(), 5);
}

#[test]
fn test_occupied_square_rejected_without_state_change() {
    let mut game = Game::new();
    game.make_move(Position::Center).expect("Valid move");
    let before = game.clone();

    let result = game.make_move(Position::Center);

    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game, before);
}

#[test]
fn test_win_on_diagonal_then_moves_rejected() {
    let mut game = Game::new();
    // X takes the 0-4-8 diagonal.
    for index in [0, 1, 4, 2, 8] {
        game.make_move_at(index).expect("Valid move");
    }

    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");

    let before = game.clone();
    let result = game.make_move_at(3);

    assert_eq!(result, Err(MoveError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_rewind_then_move_truncates_future() {
    let mut game = Game::new();
    for index in [0, 1, 3] {
        game.make_move_at(index).expect("Valid move");
    }
    assert_eq!(game.len(), 4);

    game.jump_to(1).expect("Step exists");
    game.make_move_at(4).expect("Valid move");

    assert_eq!(game.len(), 3);
    assert_eq!(game.current_step(), 2);
    // The player to move at step 1 was O, so the new mark is O.
    assert_eq!(
        game.current().board().get(Position::Center),
        Square::Occupied(Player::O)
    );
    // The discarded future is gone: X's move at middle-left never happened.
    assert!(game
        .snapshots()
        .iter()
        .all(|s| s.board().get(Position::MiddleLeft) == Square::Empty));
}

#[test]
fn test_jump_out_of_range_rejected() {
    let mut game = Game::new();
    game.make_move_at(0).expect("Valid move");
    game.make_move_at(1).expect("Valid move");
    let before = game.clone();

    let err = game.jump_to(5).expect_err("Step past history");

    assert_eq!(err.step, 5);
    assert_eq!(err.len, 3);
    assert_eq!(game, before);
}

#[test]
fn test_jump_to_current_step_is_noop() {
    let mut game = Game::new();
    game.make_move_at(0).expect("Valid move");
    let before = game.clone();

    game.jump_to(game.current_step()).expect("Step exists");

    assert_eq!(game, before);
}

#[test]
fn test_navigation_goes_forward_too() {
    let mut game = Game::new();
    for index in [0, 1, 4] {
        game.make_move_at(index).expect("Valid move");
    }

    game.jump_to(0).expect("Step exists");
    assert_eq!(game.current().to_move(), Player::X);

    // The future is intact until a move is made, so the jump forward works.
    game.jump_to(3).expect("Step exists");
    assert_eq!(game.len(), 4);
    assert_eq!(
        game.current().board().get(Position::Center),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_rejected_move_after_rewind_keeps_future() {
    let mut game = Game::new();
    for index in [0, 1, 4] {
        game.make_move_at(index).expect("Valid move");
    }

    game.jump_to(1).expect("Step exists");
    // Top-left was taken at move #1, so this is rejected and must not truncate.
    let result = game.make_move_at(0);

    assert_eq!(result, Err(MoveError::SquareOccupied(Position::TopLeft)));
    assert_eq!(game.len(), 4);
    assert_eq!(game.current_step(), 1);
}

#[test]
fn test_out_of_range_index_fails_loudly() {
    let mut game = Game::new();
    let before = game.clone();

    assert_eq!(game.make_move_at(9), Err(MoveError::InvalidPosition(9)));
    assert_eq!(game.make_move_at(42), Err(MoveError::InvalidPosition(42)));
    assert_eq!(game, before);
}

#[test]
fn test_winners_are_mutually_exclusive() {
    let mut game = Game::new();
    for index in [0, 1, 4, 2, 8] {
        game.make_move_at(index).expect("Valid move");
    }

    // No reachable snapshot has lines for both players.
    for snapshot in game.snapshots() {
        let winner = check_winner(snapshot.board());
        assert_ne!(winner, Some(Player::O));
    }
    assert_eq!(check_winner(game.current().board()), Some(Player::X));
}

#[test]
fn test_full_board_without_winner_reports_next_player() {
    let mut game = Game::new();
    // X: 0, 2, 3, 7, 8 / O: 1, 4, 5, 6 - no line for either player.
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.make_move_at(index).expect("Valid move");
    }

    assert!(is_full(game.current().board()));
    assert_eq!(game.winner(), None);
    // Status deliberately falls through to the next player on a drawn board.
    assert_eq!(game.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_entries_pair_labels_with_steps() {
    let mut game = Game::new();
    game.make_move_at(0).expect("Valid move");
    game.make_move_at(4).expect("Valid move");

    let entries = game.entries();
    assert_eq!(entries.len(), game.len());
    assert_eq!(entries[0].to_string(), "Go to game start");
    assert_eq!(entries[1].to_string(), "Go to move #1");
    assert_eq!(entries[2].to_string(), "Go to move #2");
    for (index, entry) in entries.iter().enumerate() {
        assert_eq!(entry.step(), index);
    }
}

#[test]
fn test_serde_round_trip_preserves_rewound_state() {
    let mut game = Game::new();
    for index in [0, 1, 4] {
        game.make_move_at(index).expect("Valid move");
    }
    game.jump_to(1).expect("Step exists");

    let json = serde_json::to_string(&game).expect("Serializable");
    let restored: Game = serde_json::from_str(&json).expect("Deserializable");

    assert_eq!(restored, game);
    assert_eq!(restored.current_step(), 1);
    assert_eq!(restored.len(), 4);
}
