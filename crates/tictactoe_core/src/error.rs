//! Error types for board and search operations.

use derive_more::{Display, Error};

/// Recoverable failures reported by the board and the search.
///
/// None of these change state: a rejected operation leaves the board
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Coordinates fall outside the grid.
    #[display("Cell ({row}, {col}) is outside the {dimension}x{dimension} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board dimension.
        dimension: usize,
    },

    /// The target cell already holds a marker.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Search was asked for a move on a full board.
    #[display("No moves available")]
    NoMovesAvailable,

    /// `Marker::Empty` was supplied where a player marker is required.
    #[display("Empty is not a player marker")]
    EmptyMarker,

    /// Board dimension outside the supported range.
    #[display("Unsupported board dimension {dimension}")]
    InvalidDimension {
        /// Requested dimension.
        dimension: usize,
    },

    /// A textual board could not be parsed.
    #[display("Could not parse board: {reason}")]
    Parse {
        /// What was wrong with the input.
        reason: String,
    },
}
