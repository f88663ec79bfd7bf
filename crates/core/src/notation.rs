use anyhow::{anyhow, Result};
use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while},
    character::complete::{one_of, space0, space1},
    combinator::{all_consuming, map, opt, value},
    multi::separated_list0,
    sequence::{delimited, pair, preceded},
    IResult,
};

use crate::{
    ai::Tier,
    game::{BoardPos, CoordTyp},
    session::GameConfig,
};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    New(GameConfig),
    Move(BoardPos),
    Replay(Vec<BoardPos>),
    History,
    Ai,
    Pass,
    Moves,
    Show,
    Help,
    Quit,
}

fn sp(i: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace())(i)
}

fn file(i: &str) -> IResult<&str, CoordTyp> {
    map(one_of("abcdefghABCDEFGH"), |c| {
        c.to_ascii_lowercase() as CoordTyp - b'a'
    })(i)
}

fn rank(i: &str) -> IResult<&str, CoordTyp> {
    map(one_of("12345678"), |c| c as CoordTyp - b'1')(i)
}

fn board_pos(i: &str) -> IResult<&str, BoardPos> {
    map(pair(file, rank), |(col, row)| BoardPos::new(row, col))(i)
}

fn mode(i: &str) -> IResult<&str, GameConfig> {
    alt((
        value(GameConfig::default(), tag_no_case("pvp")),
        value(GameConfig::vs_computer(Tier::Novice), tag_no_case("novice")),
        value(GameConfig::vs_computer(Tier::Expert), tag_no_case("expert")),
    ))(i)
}

fn command(i: &str) -> IResult<&str, Command> {
    alt((
        map(
            preceded(tag_no_case("new"), opt(preceded(space1, mode))),
            |m| Command::New(m.unwrap_or_default()),
        ),
        map(
            preceded(pair(tag_no_case("move"), space1), board_pos),
            Command::Move,
        ),
        map(
            preceded(pair(tag_no_case("replay"), space1), transcript),
            Command::Replay,
        ),
        value(Command::Moves, tag_no_case("moves")),
        value(Command::History, tag_no_case("history")),
        map(board_pos, Command::Move),
        value(Command::Ai, tag_no_case("ai")),
        value(Command::Pass, tag_no_case("pass")),
        value(Command::Show, alt((tag_no_case("show"), tag_no_case("d")))),
        value(Command::Help, alt((tag_no_case("help"), tag_no_case("?")))),
        value(Command::Quit, alt((tag_no_case("quit"), tag_no_case("exit")))),
    ))(i)
}

fn transcript(i: &str) -> IResult<&str, Vec<BoardPos>> {
    delimited(sp, separated_list0(space1, board_pos), sp)(i)
}

/// Parses a single console line such as `move d3`, `f5` or `new expert`.
pub fn parse_command(line: &str) -> Result<Command> {
    all_consuming(delimited(space0, command, space0))(line.trim_end())
        .map(|(_, c)| c)
        .map_err(|e| anyhow!("Invalid command {line:?}: {e}"))
}

/// Parses a whitespace separated list of moves such as `f5 d6 c3`.
pub fn parse_transcript(src: &str) -> Result<Vec<BoardPos>> {
    all_consuming(transcript)(src)
        .map(|(_, moves)| moves)
        .map_err(|e| anyhow!("Invalid move list {src:?}: {e}"))
}

pub fn to_transcript(moves: &[BoardPos]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
