//! Terminal tic-tac-toe built on [`tictactoe_core`].
//!
//! # Architecture
//!
//! - **Config**: TOML-backed settings (board size, computer marker, first player)
//! - **Session**: turn order, computer replies and statistics around one board
//! - **Render**: text drawing of the board with the winning line highlighted
//! - **Input**: parsing of commands typed at the prompt
//!
//! # Example
//!
//! ```
//! use tictactoe::{ComputerSide, GameConfig, GameSession};
//!
//! # fn main() -> Result<(), tictactoe::SessionError> {
//! let config = GameConfig::new().with_computer(ComputerSide::O);
//! let mut session = GameSession::new(config)?;
//!
//! let turn = session.play(1, 1)?;
//! assert!(turn.reply.is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod render;
mod session;
mod stats;

pub use config::{ComputerSide, ConfigError, GameConfig, PlayerSide};
pub use input::{HELP, Input, InputError};
pub use render::{render_board, render_status};
pub use session::{GameSession, SessionError, Turn};
pub use stats::{Scoreboard, SearchTimings, TIMING_WINDOW};

pub use tictactoe_core::{
    Board, GameError, GameStatus, LineKind, Marker, Move, ScoredMove, SearchConfig, Searcher,
    WinResult, WinningLine, find_best_move,
};
