mod matches;

use std::io::{stdin, stdout, BufRead, Cursor, Read};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use reversi_core::{
    ai::Tier,
    console,
    game::BoardPos,
    notation::{parse_transcript, to_transcript},
    session::GameConfig,
};
use tracing_subscriber::EnvFilter;

use crate::matches::{run_match, EngineKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Pvp,
    Novice,
    Expert,
}

impl From<Mode> for GameConfig {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Pvp => GameConfig::default(),
            Mode::Novice => GameConfig::vs_computer(Tier::Novice),
            Mode::Expert => GameConfig::vs_computer(Tier::Expert),
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Reversi on the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Play interactively on stdin/stdout
    Play {
        #[arg(short, long, value_enum, default_value_t = Mode::Pvp)]
        mode: Mode,

        /// Moves to play before handing over, e.g. "e3 f5 d6"
        #[arg(long, value_parser = move_list)]
        moves: Option<MoveList>,
    },
    /// Pit two engines against each other
    Match {
        #[arg(long, value_enum, default_value_t = EngineKind::Novice)]
        black: EngineKind,

        #[arg(long, value_enum, default_value_t = EngineKind::Random)]
        white: EngineKind,

        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Seed for the random engine
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone)]
struct MoveList(Vec<BoardPos>);

fn move_list(src: &str) -> Result<MoveList> {
    parse_transcript(src).map(MoveList)
}

/// A `replay` line for the console, so a starting move list goes through the
/// same path as typed input.
fn opening(moves: Option<MoveList>) -> impl BufRead {
    let line = match moves {
        Some(MoveList(moves)) if !moves.is_empty() => {
            format!("replay {}\n", to_transcript(&moves))
        }
        _ => String::new(),
    };
    Cursor::new(line)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let command = args.command.unwrap_or(SubCommands::Play {
        mode: Mode::Pvp,
        moves: None,
    });
    match command {
        SubCommands::Play { mode, moves } => {
            let input = opening(moves).chain(stdin().lock());
            let state = console::run_console(input, stdout().lock(), mode.into())?;
            tracing::info!(score = %state.score(), "session ended");
        }
        SubCommands::Match {
            black,
            white,
            games,
            seed,
        } => {
            let tally = run_match(black, white, games, seed);
            println!("{black:?} (X) vs {white:?} (O)");
            println!("{tally}");
        }
    }

    Ok(())
}
