//! Tests for full games played through a session.

use tictactoe::{ComputerSide, GameConfig, GameSession, GameStatus, Marker, PlayerSide};

/// Plays the first legal cell every turn until the game ends.
fn play_naively(session: &mut GameSession) -> GameStatus {
    while !session.status().is_over() {
        if session.is_computer_turn() {
            session.computer_move().expect("computer has a move");
            continue;
        }
        let mv = session
            .board()
            .empty_cells()
            .next()
            .expect("an empty cell remains");
        session.play(mv.row, mv.col).expect("legal move");
    }
    session.status()
}

#[test]
fn test_computer_as_o_never_loses() {
    let mut session = GameSession::new(GameConfig::new()).unwrap();
    let status = play_naively(&mut session);
    assert_ne!(status.winner(), Some(Marker::X));
}

#[test]
fn test_computer_as_x_beats_naive_play() {
    let config = GameConfig::new()
        .with_computer(ComputerSide::X)
        .with_first(PlayerSide::X);
    let mut session = GameSession::new(config).unwrap();
    let status = play_naively(&mut session);
    assert_eq!(status.winner(), Some(Marker::X));
    assert_eq!(*session.scoreboard().x_wins(), 1);
}

#[test]
fn test_scoreboard_survives_reset() {
    let mut session = GameSession::new(GameConfig::new()).unwrap();
    play_naively(&mut session);
    session.reset();
    play_naively(&mut session);
    assert_eq!(session.scoreboard().games(), 2);
    assert!(session.timings().samples() >= 2);
}

#[test]
fn test_two_humans_draw() {
    let config = GameConfig::new().with_computer(ComputerSide::None);
    let mut session = GameSession::new(config).unwrap();
    // X O X / X O O / O X X
    for (row, col) in [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ] {
        session.play(row, col).unwrap();
    }
    assert_eq!(session.status(), GameStatus::Draw);
    assert_eq!(*session.scoreboard().draws(), 1);
    assert_eq!(session.timings().samples(), 0);
}

#[test]
fn test_four_by_four_game_completes() {
    let config = GameConfig::new().with_dimension(4).with_max_depth(Some(2));
    let mut session = GameSession::new(config).unwrap();
    let status = play_naively(&mut session);
    assert!(status.is_over());
}
