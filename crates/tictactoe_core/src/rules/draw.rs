//! Draw detection logic for tic-tac-toe.

use super::win::find_line;
use crate::{Board, Marker};
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&c| c != Marker::Empty)
}

/// A full board with no completed line for either player.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && find_line(board, Marker::X).is_none() && find_line(board, Marker::O).is_none()
}
