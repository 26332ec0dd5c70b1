//! Session statistics: outcome tally and computer thinking time.

use derive_getters::Getters;
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;
use tictactoe_core::{GameStatus, Marker};
use tracing::{debug, instrument};

/// Number of recent searches kept for the longest/shortest figures.
pub const TIMING_WINDOW: usize = 100;

/// Finished games by outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize)]
pub struct Scoreboard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Counts a finished game. In-progress statuses are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won {
                marker: Marker::X, ..
            } => self.x_wins += 1,
            GameStatus::Won {
                marker: Marker::O, ..
            } => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress | GameStatus::Won { .. } => return,
        }
        debug!(?self, "Recorded outcome");
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {} | O wins: {} | Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Wall-clock time spent by the computer choosing moves.
#[derive(Debug, Clone, Default)]
pub struct SearchTimings {
    last: Option<Duration>,
    recent: VecDeque<Duration>,
}

impl SearchTimings {
    /// Records one search, evicting the oldest sample past [`TIMING_WINDOW`].
    pub fn record(&mut self, elapsed: Duration) {
        self.last = Some(elapsed);
        self.recent.push_back(elapsed);
        if self.recent.len() > TIMING_WINDOW {
            self.recent.pop_front();
        }
    }

    /// Most recent search time.
    pub fn last(&self) -> Option<Duration> {
        self.last
    }

    /// Longest search within the window.
    pub fn longest(&self) -> Option<Duration> {
        self.recent.iter().max().copied()
    }

    /// Shortest search within the window.
    pub fn shortest(&self) -> Option<Duration> {
        self.recent.iter().min().copied()
    }

    /// Number of samples held.
    pub fn samples(&self) -> usize {
        self.recent.len()
    }
}

impl std::fmt::Display for SearchTimings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ms = |d: Option<Duration>| match d {
            Some(d) => format!("{:.2}ms", d.as_secs_f64() * 1000.0),
            None => "-".to_string(),
        };
        write!(
            f,
            "Last move calculation: {} | Longest: {} | Shortest: {}",
            ms(self.last),
            ms(self.longest()),
            ms(self.shortest())
        )
    }
}
