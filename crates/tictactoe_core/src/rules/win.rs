//! Win detection logic for tic-tac-toe.

use crate::{Board, LineKind, Marker, WinningLine};
use tracing::instrument;

/// Enumerates every winnable line of a board in scan order.
///
/// Rows top to bottom, then columns left to right, then the anti-diagonal
/// (top-right to bottom-left) and finally the main diagonal.
#[instrument(level = "trace")]
pub fn lines(dimension: usize) -> Vec<WinningLine> {
    let mut lines = Vec::with_capacity(2 * dimension + 2);

    for row in 0..dimension {
        let cells = (0..dimension).map(|col| row * dimension + col).collect();
        lines.push(WinningLine::new(LineKind::Row(row), cells));
    }

    for col in 0..dimension {
        let cells = (0..dimension).map(|row| row * dimension + col).collect();
        lines.push(WinningLine::new(LineKind::Column(col), cells));
    }

    let anti = (0..dimension)
        .map(|i| i * dimension + (dimension - 1 - i))
        .collect();
    lines.push(WinningLine::new(LineKind::AntiDiagonal, anti));

    let main = (0..dimension).map(|i| i * dimension + i).collect();
    lines.push(WinningLine::new(LineKind::Diagonal, main));

    lines
}

/// Checks whether every cell of `line` holds `marker`.
pub fn completes(board: &Board, line: &WinningLine, marker: Marker) -> bool {
    marker.is_player() && line.cells().iter().all(|&i| board.cells()[i] == marker)
}

/// Returns the first line completed by `marker`, if any.
#[instrument(level = "trace", skip(board))]
pub fn find_line(board: &Board, marker: Marker) -> Option<WinningLine> {
    if !marker.is_player() {
        return None;
    }

    // A line needs `dimension` markers of the same kind.
    let placed = board.cells().iter().filter(|&&c| c == marker).count();
    if placed < board.dimension() {
        return None;
    }

    lines(board.dimension())
        .into_iter()
        .find(|line| completes(board, line, marker))
}
