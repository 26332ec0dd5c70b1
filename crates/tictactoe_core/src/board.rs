//! The game board: a square grid of markers in row-major order.

use crate::rules::{draw, win};
use crate::{GameError, GameStatus, Marker, Move, WinResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Canonical board dimension.
pub const DEFAULT_DIMENSION: usize = 3;

/// Largest supported board dimension.
pub const MAX_DIMENSION: usize = 10;

/// Square tic-tac-toe board.
///
/// Cells only ever go from `Empty` to a player marker; [`Board::reset`] is
/// the only way back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    /// Side length of the grid.
    dimension: usize,
    /// Cells in row-major order.
    cells: Vec<Marker>,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    dimension: usize,
    cells: Vec<Marker>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Board::new(raw.dimension)?;
        if raw.cells.len() != board.cells.len() {
            return Err(GameError::Parse {
                reason: format!(
                    "{} cells do not fit a {}x{} board",
                    raw.cells.len(),
                    raw.dimension,
                    raw.dimension
                ),
            });
        }
        board.cells = raw.cells;
        Ok(board)
    }
}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimension`] unless `1 <= dimension <= MAX_DIMENSION`.
    #[instrument]
    pub fn new(dimension: usize) -> Result<Self, GameError> {
        if !(1..=MAX_DIMENSION).contains(&dimension) {
            return Err(GameError::InvalidDimension { dimension });
        }
        Ok(Self {
            dimension,
            cells: vec![Marker::Empty; dimension * dimension],
        })
    }

    /// Returns the side length of the grid.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Marker] {
        &self.cells
    }

    /// Converts coordinates into a row-major index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] when either coordinate is off the grid.
    pub fn index_of(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if row >= self.dimension || col >= self.dimension {
            return Err(GameError::OutOfBounds {
                row,
                col,
                dimension: self.dimension,
            });
        }
        Ok(row * self.dimension + col)
    }

    /// Places `marker` at `(row, col)`.
    ///
    /// Fails without touching the board when the coordinates are off the
    /// grid, the cell is already taken, or `marker` is `Empty`.
    #[instrument(skip(self))]
    pub fn mark(&mut self, row: usize, col: usize, marker: Marker) -> Result<(), GameError> {
        let idx = self.index_of(row, col).inspect_err(|e| {
            warn!(error = %e, "Rejected mark");
        })?;

        if !marker.is_player() {
            warn!("Rejected mark of empty marker");
            return Err(GameError::EmptyMarker);
        }

        if self.cells[idx] != Marker::Empty {
            warn!(occupant = %self.cells[idx], "Rejected mark on occupied cell");
            return Err(GameError::CellOccupied { row, col });
        }

        self.cells[idx] = marker;
        debug!(index = idx, "Marked cell");
        Ok(())
    }

    /// Empties every cell. The dimension is kept.
    #[instrument(skip(self), fields(dimension = self.dimension))]
    pub fn reset(&mut self) {
        self.cells.fill(Marker::Empty);
        debug!("Board reset");
    }

    /// Returns the marker at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] when either coordinate is off the grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Marker, GameError> {
        let idx = self.index_of(row, col)?;
        Ok(self.cells[idx])
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        draw::is_full(self)
    }

    /// Number of cells holding a player marker.
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_player()).count()
    }

    /// Empty cells as moves, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        let dimension = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Marker::Empty)
            .map(move |(idx, _)| Move::from_index(idx, dimension))
    }

    /// Looks for a completed line of `marker`.
    ///
    /// Rows are scanned first, then columns, then the anti-diagonal and the
    /// main diagonal; the first complete line is returned.
    #[instrument(skip(self))]
    pub fn find_winner(&self, marker: Marker) -> WinResult {
        match win::find_line(self, marker) {
            Some(line) => WinResult::Found(line),
            None => WinResult::NotFound,
        }
    }

    /// Derives the game status. X is checked before O.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        for marker in [Marker::X, Marker::O] {
            if let Some(line) = win::find_line(self, marker) {
                return GameStatus::Won { marker, line };
            }
        }
        if draw::is_draw(self) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Writes a marker without checks. Search scratch boards only.
    pub(crate) fn place(&mut self, index: usize, marker: Marker) {
        self.cells[index] = marker;
    }

    /// Undoes [`Board::place`]. Search scratch boards only.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Marker::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            cells: vec![Marker::Empty; DEFAULT_DIMENSION * DEFAULT_DIMENSION],
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.dimension].join("+");
        for (row, cells) in self.cells.chunks(self.dimension).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            let line: Vec<String> = cells.iter().map(ToString::to_string).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses `X`, `O` and `.`/`_` cells in row-major order.
    ///
    /// Whitespace and the `|`, `+`, `-` separators printed by `Display` are
    /// skipped. The cell count must be a perfect square.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(s.len());
        for symbol in s.chars() {
            if symbol.is_whitespace() || matches!(symbol, '|' | '+' | '-') {
                continue;
            }
            let marker = Marker::from_symbol(symbol).ok_or_else(|| GameError::Parse {
                reason: format!("unexpected character {symbol:?}"),
            })?;
            cells.push(marker);
        }

        let dimension = cells.len().isqrt();
        if dimension * dimension != cells.len() {
            return Err(GameError::Parse {
                reason: format!("{} cells do not form a square board", cells.len()),
            });
        }

        let mut board = Board::new(dimension)?;
        board.cells = cells;
        Ok(board)
    }
}
