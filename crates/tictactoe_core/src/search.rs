//! Minimax move search for the computer opponent.
//!
//! The search is stateless between calls: it clones the caller's board,
//! explores the game tree on that private copy and hands back a [`Move`].
//!
//! # Scoring
//!
//! With `cells = dimension²` and `depth` counting plies from the root (the
//! candidate move itself is depth 1), a terminal position scores
//! `cells + 1 - depth` when the searching marker has won, the negation of
//! that when the opponent has won, and `0` for a draw. Faster wins and
//! slower losses therefore score better. Among equally scored root moves the
//! first one in row-major order is chosen.

use crate::rules::win;
use crate::{Board, GameError, Marker, Move, WinningLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Depth bound applied to boards larger than the canonical 3x3.
pub const DEEP_BOARD_MAX_DEPTH: usize = 4;

/// Tuning knobs for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum plies to look ahead. `None` searches to the end of the game.
    ///
    /// Non-terminal positions at the bound score as a draw.
    pub max_depth: Option<usize>,
}

impl SearchConfig {
    /// Exhaustive search.
    pub fn exhaustive() -> Self {
        Self { max_depth: None }
    }

    /// Search bounded at `max_depth` plies.
    pub fn bounded(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    /// Exhaustive up to 3x3, bounded at [`DEEP_BOARD_MAX_DEPTH`] beyond.
    pub fn for_dimension(dimension: usize) -> Self {
        if dimension <= crate::DEFAULT_DIMENSION {
            Self::exhaustive()
        } else {
            Self::bounded(DEEP_BOARD_MAX_DEPTH)
        }
    }
}

/// A chosen move together with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The selected move.
    pub mv: Move,
    /// Minimax score of the move from the searching marker's point of view.
    pub score: i32,
    /// Positions visited while searching.
    pub nodes: u64,
}

/// Minimax searcher. Holds configuration only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Creates a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Picks the best move for `marker` on `board`.
    ///
    /// # Errors
    ///
    /// [`GameError::EmptyMarker`] when `marker` is `Empty`,
    /// [`GameError::NoMovesAvailable`] when the board is full.
    pub fn find_best_move(&self, board: &Board, marker: Marker) -> Result<Move, GameError> {
        self.analyze(board, marker).map(|scored| scored.mv)
    }

    /// Like [`Searcher::find_best_move`] but also reports score and node count.
    #[instrument(skip(self, board), fields(max_depth = ?self.config.max_depth))]
    pub fn analyze(&self, board: &Board, marker: Marker) -> Result<ScoredMove, GameError> {
        if !marker.is_player() {
            return Err(GameError::EmptyMarker);
        }

        let mut scratch = board.clone();
        let lines = win::lines(board.dimension());
        let mut walk = Walk {
            root: marker,
            lines: &lines,
            ceiling: (board.cells().len() + 1) as i32,
            max_depth: self.config.max_depth.map(|d| d.max(1)),
            nodes: 0,
        };

        let mut best: Option<(usize, i32)> = None;
        for idx in 0..scratch.cells().len() {
            if scratch.cells()[idx] != Marker::Empty {
                continue;
            }
            scratch.place(idx, marker);
            let score = walk.minimax(&mut scratch, marker.opponent(), 1);
            scratch.clear(idx);

            debug!(index = idx, score, "Scored candidate");
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((idx, score));
            }
        }

        let (idx, score) = best.ok_or(GameError::NoMovesAvailable)?;
        let mv = Move::from_index(idx, board.dimension());
        debug!(%mv, score, nodes = walk.nodes, "Selected move");
        Ok(ScoredMove {
            mv,
            score,
            nodes: walk.nodes,
        })
    }
}

/// Picks the best move for `marker` with the default configuration for the
/// board's size.
///
/// # Errors
///
/// See [`Searcher::find_best_move`].
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn find_best_move(board: &Board, marker: Marker) -> Result<Move, GameError> {
    Searcher::new(SearchConfig::for_dimension(board.dimension())).find_best_move(board, marker)
}

/// State of a single search.
struct Walk<'a> {
    root: Marker,
    lines: &'a [WinningLine],
    ceiling: i32,
    max_depth: Option<usize>,
    nodes: u64,
}

impl Walk<'_> {
    /// Score of `board` if it is terminal at `depth`.
    fn terminal_score(&self, board: &Board, depth: usize) -> Option<i32> {
        let won = |marker: Marker| self.lines.iter().any(|line| win::completes(board, line, marker));
        let magnitude = self.ceiling - depth as i32;

        if won(self.root) {
            Some(magnitude)
        } else if won(self.root.opponent()) {
            Some(-magnitude)
        } else if board.is_full() {
            Some(0)
        } else {
            None
        }
    }

    fn minimax(&mut self, board: &mut Board, to_move: Marker, depth: usize) -> i32 {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(board, depth) {
            return score;
        }
        if self.max_depth.is_some_and(|max| depth >= max) {
            return 0;
        }

        let maximizing = to_move == self.root;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for idx in 0..board.cells().len() {
            if board.cells()[idx] != Marker::Empty {
                continue;
            }
            board.place(idx, to_move);
            let score = self.minimax(board, to_move.opponent(), depth + 1);
            board.clear(idx);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_a_draw_and_picks_first_cell() {
        let scored = Searcher::default()
            .analyze(&Board::default(), Marker::X)
            .unwrap();
        assert_eq!(scored.score, 0);
        assert_eq!(scored.mv, Move::new(0, 0));
        assert!(scored.nodes > 0);
    }

    #[test]
    fn test_immediate_win_scores_highest() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        let scored = Searcher::default().analyze(&board, Marker::X).unwrap();
        assert_eq!(scored.mv, Move::new(0, 2));
        assert_eq!(scored.score, 9);
    }

    #[test]
    fn test_takes_win_over_block() {
        // O can block X at (0, 2) but completes its own row at (1, 2).
        let board: Board = "XX. OO. X..".parse().unwrap();
        let scored = Searcher::default().analyze(&board, Marker::O).unwrap();
        assert_eq!(scored.mv, Move::new(1, 2));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        assert_eq!(
            Searcher::default().find_best_move(&board, Marker::X),
            Err(GameError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_empty_marker_rejected() {
        assert_eq!(
            find_best_move(&Board::default(), Marker::Empty),
            Err(GameError::EmptyMarker)
        );
    }

    #[test]
    fn test_depth_bound_limits_nodes() {
        let board = Board::default();
        let full = Searcher::default().analyze(&board, Marker::X).unwrap();
        let shallow = Searcher::new(SearchConfig::bounded(2))
            .analyze(&board, Marker::X)
            .unwrap();
        assert!(shallow.nodes < full.nodes);
        // Nine candidates, each expanded once into eight leaves.
        assert_eq!(shallow.nodes, 9 * 9);
    }

    #[test]
    fn test_bounded_search_still_takes_immediate_win() {
        let board: Board = "XXX. OOO. .... ....".parse().unwrap();
        let mv = find_best_move(&board, Marker::X).unwrap();
        assert_eq!(mv, Move::new(0, 3));
    }

    #[test]
    fn test_for_dimension() {
        assert_eq!(SearchConfig::for_dimension(3), SearchConfig::exhaustive());
        assert_eq!(
            SearchConfig::for_dimension(4),
            SearchConfig::bounded(DEEP_BOARD_MAX_DEPTH)
        );
    }
}
