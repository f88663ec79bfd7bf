use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use crate::{
    game::BoardPos,
    notation::{parse_command, to_transcript, Command},
    session::{GameConfig, GameState},
};

const HELP: &str = "commands:
  <pos> | move <pos>        play a disc, e.g. d3
  ai                        let the engine play for the side to move
  pass                      give up the turn when no move is available
  moves                     list legal moves with their flip counts
  history                   print the moves played so far
  replay <pos> <pos> ...    start over and play a move list
  show | d                  print the board
  new [pvp|novice|expert]   start over
  quit";

/// Runs the line protocol until `quit` or end of input and returns the final
/// state. In a game against the computer, its replies are played straight
/// after each human turn.
pub fn run_console(
    input: impl BufRead,
    mut output: impl Write,
    config: GameConfig,
) -> Result<GameState> {
    let mut state = GameState::with_config(config);
    let mut history: Vec<BoardPos> = Vec::new();

    writeln!(output, "Reversi ({})", describe(config))?;
    write!(output, "{state}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(e) => {
                warn!("{e}");
                writeln!(output, "error: {e}")?;
                output.flush()?;
                continue;
            }
        };
        debug!(?command, "received");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Show => write!(output, "{state}")?,
            Command::New(config) => {
                state.reset(config);
                history.clear();
                writeln!(output, "new game ({})", describe(config))?;
                write!(output, "{state}")?;
            }
            Command::Moves => {
                let moves = state
                    .enumerate_moves(state.current_player())
                    .iter()
                    .map(|m| format!("{} ({})", m.pos, m.flips))
                    .collect::<Vec<_>>();
                if moves.is_empty() || state.is_game_over() {
                    writeln!(output, "no legal moves")?;
                } else {
                    writeln!(output, "{}", moves.join(" "))?;
                }
            }
            Command::History => writeln!(output, "{}", to_transcript(&history))?,
            Command::Replay(moves) => {
                state.reset(state.config());
                history.clear();
                for pos in moves {
                    if !state.play(pos) {
                        writeln!(output, "illegal move in replay: {pos}")?;
                        break;
                    }
                    history.push(pos);
                    // Move lists leave passes implicit.
                    state.pass_turn();
                }
                writeln!(output, "replayed {}", to_transcript(&history))?;
                computer_turns(&mut state, &mut history, &mut output)?;
                write!(output, "{state}")?;
            }
            Command::Move(pos) => {
                if state.awaiting_ai() || !state.play(pos) {
                    writeln!(output, "illegal move: {pos}")?;
                } else {
                    history.push(pos);
                    writeln!(output, "played {pos}")?;
                    computer_turns(&mut state, &mut history, &mut output)?;
                    write!(output, "{state}")?;
                }
            }
            Command::Ai => match state.play_ai_move() {
                Some(pos) => {
                    history.push(pos);
                    writeln!(output, "engine plays {pos}")?;
                    computer_turns(&mut state, &mut history, &mut output)?;
                    write!(output, "{state}")?;
                }
                None if state.pass_turn() => {
                    writeln!(output, "engine passes")?;
                    computer_turns(&mut state, &mut history, &mut output)?;
                    write!(output, "{state}")?;
                }
                None => writeln!(output, "no move available")?,
            },
            Command::Pass => {
                if state.pass_turn() {
                    writeln!(output, "passed")?;
                    computer_turns(&mut state, &mut history, &mut output)?;
                    write!(output, "{state}")?;
                } else if state.is_game_over() {
                    write!(output, "{state}")?;
                } else {
                    writeln!(output, "cannot pass while a move is available")?;
                }
            }
        }

        output.flush()?;
    }

    Ok(state)
}

/// Plays the computer side for as long as it holds the turn.
fn computer_turns(
    state: &mut GameState,
    history: &mut Vec<BoardPos>,
    output: &mut impl Write,
) -> Result<()> {
    while state.awaiting_ai() {
        if let Some(pos) = state.play_ai_move() {
            history.push(pos);
            writeln!(output, "computer plays {pos}")?;
        } else if state.pass_turn() {
            writeln!(output, "computer passes")?;
        } else {
            break;
        }
    }

    if !state.is_game_over() && !state.has_any_legal_move(state.current_player()) {
        writeln!(output, "{} has no legal move and must pass", state.current_player())?;
    }

    Ok(())
}

fn describe(config: GameConfig) -> String {
    if config.vs_computer {
        format!("vs computer, {}", config.tier)
    } else {
        "two players".to_string()
    }
}
