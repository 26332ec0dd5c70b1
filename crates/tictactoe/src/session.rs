//! A single game session: the board plus the bookkeeping around it.
//!
//! Turn order, the computer's marker and the statistics live here, held by
//! the caller, rather than in the board.

use crate::config::GameConfig;
use crate::stats::{Scoreboard, SearchTimings};
use derive_more::{Display, Error, From};
use std::time::Instant;
use tictactoe_core::{Board, GameError, GameStatus, Marker, Move, Searcher};
use tracing::{debug, info, instrument, warn};

/// Errors from driving a session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The board rejected the operation.
    #[display("{}", _0)]
    #[from]
    Game(GameError),

    /// The game has finished; reset to play again.
    #[display("Game is already over")]
    GameOver,

    /// A human tried to move while the computer is to play.
    #[display("It is the computer's turn")]
    ComputerToMove,

    /// The computer was asked to move on a human's turn.
    #[display("It is not the computer's turn")]
    NotComputerTurn,
}

/// What happened during one call to [`GameSession::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Marker the human placed.
    pub player: Marker,
    /// Where the human played.
    pub human: Move,
    /// The computer's answer, when it had one.
    pub reply: Option<Move>,
    /// Status after the turn.
    pub status: GameStatus,
}

/// An interactive game with optional computer opponent.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    current: Marker,
    searcher: Searcher,
    scoreboard: Scoreboard,
    timings: SearchTimings,
    recorded: bool,
}

impl GameSession {
    /// Starts a session with an empty board.
    #[instrument(skip(config), fields(dimension = config.dimension(), computer = %config.computer()))]
    pub fn new(config: GameConfig) -> Result<Self, SessionError> {
        let board = Board::new(*config.dimension())?;
        info!("Creating new game session");
        Ok(Self {
            board,
            current: config.first().marker(),
            searcher: Searcher::new(config.search_config()),
            scoreboard: Scoreboard::default(),
            timings: SearchTimings::default(),
            recorded: false,
            config,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Marker to move next.
    pub fn current_player(&self) -> Marker {
        self.current
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Outcome tally across resets.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Computer thinking times across resets.
    pub fn timings(&self) -> &SearchTimings {
        &self.timings
    }

    /// True when a computer opponent is configured.
    pub fn vs_computer(&self) -> bool {
        self.config.computer().marker().is_some()
    }

    /// True when the game is live and the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        self.config.computer().marker() == Some(self.current) && !self.status().is_over()
    }

    /// Places the current player's marker at `(row, col)`.
    ///
    /// When a computer opponent is configured and the game continues, the
    /// computer replies within the same call.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<Turn, SessionError> {
        if self.status().is_over() {
            warn!("Move after game end");
            return Err(SessionError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(SessionError::ComputerToMove);
        }

        let player = self.current;
        self.board.mark(row, col, player)?;
        self.current = player.opponent();
        let mut status = self.settle();

        let reply = if self.is_computer_turn() {
            let mv = self.computer_move()?;
            status = self.status();
            Some(mv)
        } else {
            None
        };

        Ok(Turn {
            player,
            human: Move::new(row, col),
            reply,
            status,
        })
    }

    /// Lets the computer play its marker. Used when the computer moves first.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<Move, SessionError> {
        if self.status().is_over() {
            return Err(SessionError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }

        let marker = self.current;
        let started = Instant::now();
        let mv = self.searcher.find_best_move(&self.board, marker)?;
        let elapsed = started.elapsed();
        self.timings.record(elapsed);
        debug!(%mv, ?elapsed, "Computer chose move");

        self.board.mark(mv.row, mv.col, marker)?;
        self.current = marker.opponent();
        self.settle();
        Ok(mv)
    }

    /// Clears the board for a new game. Statistics are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = self.config.first().marker();
        self.recorded = false;
        info!("Game reset");
    }

    /// Tallies the outcome the first time the game is seen finished.
    fn settle(&mut self) -> GameStatus {
        let status = self.status();
        if status.is_over() && !self.recorded {
            info!(%status, "Game over");
            self.scoreboard.record(&status);
            self.recorded = true;
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ComputerSide, PlayerSide};

    fn two_player() -> GameSession {
        GameSession::new(GameConfig::new().with_computer(ComputerSide::None)).unwrap()
    }

    #[test]
    fn test_players_alternate() {
        let mut session = two_player();
        assert_eq!(session.current_player(), Marker::X);
        session.play(0, 0).unwrap();
        assert_eq!(session.current_player(), Marker::O);
        session.play(1, 1).unwrap();
        assert_eq!(session.current_player(), Marker::X);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = two_player();
        session.play(0, 0).unwrap();
        assert_eq!(
            session.play(0, 0),
            Err(SessionError::Game(GameError::CellOccupied { row: 0, col: 0 }))
        );
        assert!(matches!(
            session.play(5, 0),
            Err(SessionError::Game(GameError::OutOfBounds { .. }))
        ));
        assert_eq!(session.current_player(), Marker::O);
        assert_eq!(session.board().move_count(), 1);
    }

    #[test]
    fn test_win_is_tallied_once() {
        let mut session = two_player();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            session.play(row, col).unwrap();
        }
        let turn = session.play(0, 2).unwrap();
        assert_eq!(turn.status.winner(), Some(Marker::X));
        assert_eq!(session.play(2, 2), Err(SessionError::GameOver));
        assert_eq!(*session.scoreboard().x_wins(), 1);
        assert_eq!(session.scoreboard().games(), 1);
    }

    #[test]
    fn test_computer_replies() {
        let mut session = GameSession::new(GameConfig::new()).unwrap();
        let turn = session.play(0, 0).unwrap();
        assert_eq!(turn.player, Marker::X);
        assert_eq!(turn.reply, Some(Move::new(1, 1)));
        assert_eq!(session.current_player(), Marker::X);
        assert_eq!(session.timings().samples(), 1);
    }

    #[test]
    fn test_computer_moves_first() {
        let config = GameConfig::new().with_computer(ComputerSide::X);
        let mut session = GameSession::new(config).unwrap();
        assert!(session.is_computer_turn());
        assert_eq!(session.play(1, 1), Err(SessionError::ComputerToMove));

        let mv = session.computer_move().unwrap();
        assert_eq!(session.board().cell_at(mv.row, mv.col), Ok(Marker::X));
        assert_eq!(session.computer_move(), Err(SessionError::NotComputerTurn));
    }

    #[test]
    fn test_reset_restores_first_player() {
        let config = GameConfig::new()
            .with_computer(ComputerSide::None)
            .with_first(PlayerSide::O);
        let mut session = GameSession::new(config).unwrap();
        session.play(0, 0).unwrap();
        session.reset();
        assert_eq!(session.current_player(), Marker::O);
        assert_eq!(session.board().move_count(), 0);
        assert_eq!(session.status(), GameStatus::InProgress);
    }
}
