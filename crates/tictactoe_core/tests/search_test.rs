//! Tests for the minimax opponent.

use tictactoe_core::{Board, GameError, Marker, Move, SearchConfig, Searcher, find_best_move};

/// Plays both sides with the search until the game ends.
fn play_perfect_game(mut board: Board, mut to_move: Marker) -> Board {
    while !board.status().is_over() {
        let mv = find_best_move(&board, to_move).expect("moves remain");
        board
            .mark(mv.row, mv.col, to_move)
            .expect("search chose an illegal move");
        to_move = to_move.opponent();
    }
    board
}

#[test]
fn test_search_is_deterministic() {
    let board: Board = "X.. .O. ...".parse().unwrap();
    let first = find_best_move(&board, Marker::X).unwrap();
    let second = find_best_move(&board, Marker::X).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_search_does_not_mutate_board() {
    let board: Board = "X.. .O. ..X".parse().unwrap();
    let before = board.clone();
    find_best_move(&board, Marker::O).unwrap();
    assert_eq!(board, before);
}

#[test]
fn test_completes_own_line() {
    // X X . / O O . / . . .
    let board: Board = "XX. OO. ...".parse().unwrap();
    assert_eq!(find_best_move(&board, Marker::X), Ok(Move::new(0, 2)));
}

#[test]
fn test_completes_column() {
    // X O . / X O . / . . .  with X to move: (2, 0) wins.
    let board: Board = "XO. XO. ...".parse().unwrap();
    assert_eq!(find_best_move(&board, Marker::X), Ok(Move::new(2, 0)));
}

#[test]
fn test_blocks_opponent() {
    // X X . / . O . / . . .  O must take (0, 2).
    let board: Board = "XX. .O. ...".parse().unwrap();
    assert_eq!(find_best_move(&board, Marker::O), Ok(Move::new(0, 2)));
}

#[test]
fn test_blocks_vertical_threat() {
    // X . . / X . . / . . .  O must take (2, 0).
    let board: Board = "X.. X.. ...".parse().unwrap();
    assert_eq!(find_best_move(&board, Marker::O), Ok(Move::new(2, 0)));
}

#[test]
fn test_answers_corner_with_centre() {
    let board: Board = "X.. ... ...".parse().unwrap();
    assert_eq!(find_best_move(&board, Marker::O), Ok(Move::new(1, 1)));
}

#[test]
fn test_perfect_play_is_a_draw() {
    let end = play_perfect_game(Board::default(), Marker::X);
    assert!(end.is_full());
    assert!(!end.find_winner(Marker::X).is_found());
    assert!(!end.find_winner(Marker::O).is_found());
}

#[test]
fn test_full_board_reports_no_moves() {
    let board: Board = "XOX XOO OXX".parse().unwrap();
    assert_eq!(
        find_best_move(&board, Marker::O),
        Err(GameError::NoMovesAvailable)
    );
}

#[test]
fn test_lost_position_ties_break_in_scan_order() {
    // X . X / . O . / O . X  X threatens (0, 1) and (1, 2); O cannot stop both.
    let board: Board = "X.X .O. O.X".parse().unwrap();
    let scored = Searcher::new(SearchConfig::exhaustive())
        .analyze(&board, Marker::O)
        .unwrap();
    // Every reply loses on X's next move, so the first empty cell is chosen.
    assert_eq!(scored.score, -8);
    assert_eq!(scored.mv, Move::new(0, 1));
}
