//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: the grid of cells, move application and win/draw queries
//! - **Rules**: line enumeration and terminal-state checks over a board
//! - **Search**: stateless minimax used by the computer opponent
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Marker, WinResult, find_best_move};
//!
//! # fn main() -> Result<(), tictactoe_core::GameError> {
//! let mut board = Board::new(3)?;
//! board.mark(0, 0, Marker::X)?;
//! board.mark(1, 1, Marker::O)?;
//! board.mark(0, 1, Marker::X)?;
//!
//! // O has to block the top row.
//! let reply = find_best_move(&board, Marker::O)?;
//! assert_eq!((reply.row, reply.col), (0, 2));
//!
//! board.mark(reply.row, reply.col, Marker::O)?;
//! assert_eq!(board.find_winner(Marker::X), WinResult::NotFound);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod rules;
mod search;
mod types;

pub use board::{Board, DEFAULT_DIMENSION, MAX_DIMENSION};
pub use error::GameError;
pub use search::{DEEP_BOARD_MAX_DEPTH, ScoredMove, SearchConfig, Searcher, find_best_move};
pub use types::{GameStatus, LineKind, Marker, Move, WinResult, WinningLine};
