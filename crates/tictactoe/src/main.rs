//! Tictactoe - unified CLI
//!
//! Interactive play on the terminal plus one-shot position analysis.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tictactoe::{
    Board, ComputerSide, GameConfig, GameSession, HELP, Input, PlayerSide, SearchConfig,
    Searcher, render_board, render_status,
};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            dimension,
            computer,
            first,
            max_depth,
        } => {
            let config = load_config(config, dimension, computer, first, max_depth)?;
            run_play(config)
        }
        Command::BestMove { board, marker } => run_best_move(&board, marker),
        Command::Analyze {
            board,
            marker,
            max_depth,
        } => run_analyze(&board, marker, max_depth),
    }
}

/// Reads the config file, if any, then applies command-line overrides.
#[instrument(skip_all)]
fn load_config(
    path: Option<PathBuf>,
    dimension: Option<usize>,
    computer: Option<ComputerSide>,
    first: Option<PlayerSide>,
    max_depth: Option<usize>,
) -> Result<GameConfig> {
    let mut config = match path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => GameConfig::new(),
    };

    if let Some(dimension) = dimension {
        config = config.with_dimension(dimension);
    }
    if let Some(computer) = computer {
        config = config.with_computer(computer);
    }
    if let Some(first) = first {
        config = config.with_first(first);
    }
    if max_depth.is_some() {
        config = config.with_max_depth(max_depth);
    }

    config.validate()?;
    debug!(?config, "Resolved configuration");
    Ok(config)
}

/// Runs the interactive game loop on stdin/stdout.
#[instrument(skip_all)]
fn run_play(config: GameConfig) -> Result<()> {
    let mut session = GameSession::new(config)?;
    info!(vs_computer = session.vs_computer(), "Starting game");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut lines = stdin.lock().lines();

    println!("{HELP}\n");
    print_board(&session);

    loop {
        if session.is_computer_turn() {
            let mv = session.computer_move()?;
            println!("Computer plays {mv}");
            print_board(&session);
            continue;
        }

        if session.status().is_over() {
            print!("Type `reset` to play again or `quit` to leave> ");
        } else {
            print!("Player {}> ", session.current_player());
        }
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let input = match line.parse::<Input>() {
            Ok(input) => input,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match input {
            Input::Place { row, col } => match session.play(row, col) {
                Ok(turn) => {
                    if let Some(reply) = turn.reply {
                        println!("Computer plays {reply}");
                    }
                    print_board(&session);
                }
                Err(e) => {
                    warn!(error = %e, "Move rejected");
                    println!("{e}");
                }
            },
            Input::Reset => {
                session.reset();
                print_board(&session);
            }
            Input::Stats => {
                println!("{}", session.scoreboard());
                if session.vs_computer() {
                    println!("{}", session.timings());
                }
            }
            Input::Help => println!("{HELP}"),
            Input::Quit => break,
        }
    }

    println!("{}", session.scoreboard());
    Ok(())
}

fn print_board(session: &GameSession) {
    println!();
    print!("{}", render_board(session.board(), &session.status()));
    println!("{}\n", render_status(session));
}

/// Prints the best move as `row col`.
#[instrument]
fn run_best_move(board: &str, marker: PlayerSide) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let searcher = Searcher::new(SearchConfig::for_dimension(board.dimension()));
    let mv = searcher.find_best_move(&board, marker.marker())?;
    println!("{} {}", mv.row, mv.col);
    Ok(())
}

/// Prints the scored best move as JSON.
#[instrument]
fn run_analyze(board: &str, marker: PlayerSide, max_depth: Option<usize>) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let config = match max_depth {
        Some(depth) => SearchConfig::bounded(depth),
        None => SearchConfig::for_dimension(board.dimension()),
    };
    let scored = Searcher::new(config).analyze(&board, marker.marker())?;
    println!("{}", serde_json::to_string_pretty(&scored)?);
    Ok(())
}
