//! Text rendering of the board and game status.

use crate::session::GameSession;
use tictactoe_core::{Board, GameStatus, Marker};

/// Draws the board with row and column labels.
///
/// Cells on the winning line, if any, are bracketed.
pub fn render_board(board: &Board, status: &GameStatus) -> String {
    let dimension = board.dimension();
    let line = match status {
        GameStatus::Won { line, .. } => Some(line),
        GameStatus::InProgress | GameStatus::Draw => None,
    };

    let mut out = String::from("   ");
    let header: Vec<String> = (0..dimension).map(|col| format!(" {col} ")).collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    let separator = vec!["---"; dimension].join("+");
    for (row, cells) in board.cells().chunks(dimension).enumerate() {
        if row > 0 {
            out.push_str("   ");
            out.push_str(&separator);
            out.push('\n');
        }
        out.push_str(&format!("{row:>2} "));
        let rendered: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, marker)| {
                let symbol = match marker {
                    Marker::Empty => " ".to_string(),
                    marker => marker.to_string(),
                };
                if line.is_some_and(|l| l.contains(row * dimension + col)) {
                    format!("[{symbol}]")
                } else {
                    format!(" {symbol} ")
                }
            })
            .collect();
        out.push_str(&rendered.join("|"));
        out.push('\n');
    }
    out
}

/// One-line summary of where the game stands.
pub fn render_status(session: &GameSession) -> String {
    match session.status() {
        GameStatus::InProgress => format!("Current player: {}", session.current_player()),
        GameStatus::Won { marker, .. } => format!("Player {marker} won"),
        GameStatus::Draw => "Tie!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_in_progress() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let text = render_board(&board, &board.status());
        assert_eq!(
            text,
            "    0   1   2 \n 0  X |   |   \n   ---+---+---\n 1    | O |   \n   ---+---+---\n 2    |   |   \n"
        );
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        let text = render_board(&board, &board.status());
        let first_row = text.lines().nth(1).unwrap();
        assert_eq!(first_row, " 0 [X]|[X]|[X]");
        assert!(!text.contains("[O]"));
    }
}
