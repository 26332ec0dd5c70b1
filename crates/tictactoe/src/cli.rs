//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::{ComputerSide, PlayerSide};

/// Tic-tac-toe with an unbeatable minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Board side length (overrides the config file)
        #[arg(short, long)]
        dimension: Option<usize>,

        /// Marker played by the computer, or `none` for two humans
        #[arg(long, value_enum)]
        computer: Option<ComputerSide>,

        /// Marker that moves first
        #[arg(long, value_enum)]
        first: Option<PlayerSide>,

        /// Search depth bound for the computer
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Print the best move for a position as `row col`
    BestMove {
        /// Board cells in row-major order, e.g. "XX. .O. ..."
        #[arg(short, long)]
        board: String,

        /// Marker to find a move for
        #[arg(short, long, value_enum)]
        marker: PlayerSide,
    },

    /// Print the best move, its score and the search size as JSON
    Analyze {
        /// Board cells in row-major order, e.g. "XX. .O. ..."
        #[arg(short, long)]
        board: String,

        /// Marker to find a move for
        #[arg(short, long, value_enum)]
        marker: PlayerSide,

        /// Search depth bound
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play_overrides() {
        let cli = Cli::parse_from([
            "tictactoe",
            "play",
            "--dimension",
            "4",
            "--computer",
            "none",
            "--first",
            "o",
        ]);
        match cli.command {
            Command::Play {
                config,
                dimension,
                computer,
                first,
                max_depth,
            } => {
                assert_eq!(config, None);
                assert_eq!(dimension, Some(4));
                assert_eq!(computer, Some(ComputerSide::None));
                assert_eq!(first, Some(PlayerSide::O));
                assert_eq!(max_depth, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_best_move() {
        let cli = Cli::parse_from(["tictactoe", "best-move", "-b", "XX. .O. ...", "-m", "o"]);
        match cli.command {
            Command::BestMove { board, marker } => {
                assert_eq!(board, "XX. .O. ...");
                assert_eq!(marker, PlayerSide::O);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
