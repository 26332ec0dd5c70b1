//! Parsing of interactive commands typed at the prompt.

use derive_more::{Display, Error};
use std::str::FromStr;

/// A command entered by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the current marker at `(row, col)`.
    Place {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// Start a new game.
    Reset,
    /// Show the scoreboard and search timings.
    Stats,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Unrecognised command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognised input {input:?}; type `help` for commands")]
pub struct InputError {
    /// What was typed.
    pub input: String,
}

impl FromStr for Input {
    type Err = InputError;

    /// Accepts `row col` (space or comma separated) and the words
    /// `reset`, `stats`, `help`, `quit` (or their first letter).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || InputError {
            input: trimmed.to_string(),
        };

        match trimmed.to_lowercase().as_str() {
            "reset" | "r" => return Ok(Input::Reset),
            "stats" | "s" => return Ok(Input::Stats),
            "help" | "h" | "?" => return Ok(Input::Help),
            "quit" | "q" | "exit" => return Ok(Input::Quit),
            _ => {}
        }

        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        match parts.as_slice() {
            [row, col] => {
                let row = row.parse().map_err(|_| invalid())?;
                let col = col.parse().map_err(|_| invalid())?;
                Ok(Input::Place { row, col })
            }
            _ => Err(invalid()),
        }
    }
}

/// Command summary shown by `help`.
pub const HELP: &str = "\
Commands:
  <row> <col>   place your marker (zero-based, e.g. `1 2`)
  reset         start a new game
  stats         show results and computer thinking time
  help          show this list
  quit          leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates() {
        assert_eq!("1 2".parse::<Input>(), Ok(Input::Place { row: 1, col: 2 }));
        assert_eq!(" 0,0 ".parse::<Input>(), Ok(Input::Place { row: 0, col: 0 }));
        assert_eq!("2, 1".parse::<Input>(), Ok(Input::Place { row: 2, col: 1 }));
    }

    #[test]
    fn test_words() {
        assert_eq!("Reset".parse::<Input>(), Ok(Input::Reset));
        assert_eq!("q".parse::<Input>(), Ok(Input::Quit));
        assert_eq!("stats".parse::<Input>(), Ok(Input::Stats));
        assert_eq!("?".parse::<Input>(), Ok(Input::Help));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!("".parse::<Input>().is_err());
        assert!("1".parse::<Input>().is_err());
        assert!("a b".parse::<Input>().is_err());
        assert!("1 2 3".parse::<Input>().is_err());
        assert!("-1 0".parse::<Input>().is_err());
    }
}
