//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// The mark occupying a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// Unoccupied cell.
    #[default]
    #[strum(to_string = ".", serialize = "empty")]
    Empty,
    /// Player X.
    #[strum(to_string = "X")]
    X,
    /// Player O.
    #[strum(to_string = "O")]
    O,
}

impl Marker {
    /// Returns the opposing marker. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
            Marker::Empty => Marker::Empty,
        }
    }

    /// True for `X` and `O`.
    pub fn is_player(self) -> bool {
        self != Marker::Empty
    }

    /// Parses a single board character.
    pub(crate) fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' => Some(Marker::X),
            'O' | 'o' => Some(Marker::O),
            '.' | '_' => Some(Marker::Empty),
            _ => None,
        }
    }
}

/// A single cell, addressed by row and column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Move {
    /// Zero-based row, top to bottom.
    pub row: usize,
    /// Zero-based column, left to right.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a row-major index into a move on a board of `dimension`.
    pub fn from_index(index: usize, dimension: usize) -> Self {
        Self {
            row: index / dimension,
            col: index % dimension,
        }
    }

    /// Converts this move into a row-major index on a board of `dimension`.
    pub fn to_index(self, dimension: usize) -> usize {
        self.row * dimension + self.col
    }
}

/// Which line of the board a win was found on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum LineKind {
    /// A full row.
    #[display("row {_0}")]
    Row(usize),
    /// A full column.
    #[display("column {_0}")]
    Column(usize),
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
}

/// A line of cells proving a win.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    kind: LineKind,
    cells: Vec<usize>,
}

impl WinningLine {
    pub(crate) fn new(kind: LineKind, cells: Vec<usize>) -> Self {
        Self { kind, cells }
    }

    /// Returns which row, column or diagonal this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the row-major indices of the line, in scan order.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Checks whether the given row-major index lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Outcome of asking whether a marker has completed a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinResult {
    /// No line is complete for the marker.
    NotFound,
    /// The marker completed the given line.
    Found(WinningLine),
}

impl WinResult {
    /// True when a winning line was found.
    pub fn is_found(&self) -> bool {
        matches!(self, WinResult::Found(_))
    }

    /// Returns the witness line, if any.
    pub fn line(&self) -> Option<&WinningLine> {
        match self {
            WinResult::Found(line) => Some(line),
            WinResult::NotFound => None,
        }
    }

    /// Converts into the witness line, if any.
    pub fn into_line(self) -> Option<WinningLine> {
        match self {
            WinResult::Found(line) => Some(line),
            WinResult::NotFound => None,
        }
    }
}

/// Current status of a game, derived from the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be made.
    InProgress,
    /// A marker completed a line.
    Won {
        /// The winning marker.
        marker: Marker,
        /// The completed line.
        line: WinningLine,
    },
    /// The board is full and nobody won.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning marker, if any.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            GameStatus::Won { marker, .. } => Some(*marker),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { marker, line } => {
                write!(f, "Player {} wins on {}", marker, line.kind())
            }
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
