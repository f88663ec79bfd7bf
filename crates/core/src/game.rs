use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
    str::FromStr,
};

use anyhow::{anyhow, Context, Result};

pub type CoordTyp = u8;
pub type CoordOffsetTyp = i8;

pub const BOARD_SIZE: usize = 8;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

type BoardData = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// The eight compass offsets as `(row, col)` deltas.
pub const DIRECTIONS: [(CoordOffsetTyp, CoordOffsetTyp); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: BoardData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub player1: usize,
    pub player2: usize,
}

impl Board {
    pub const OPENING: &'static str = "
        ........
        ........
        ........
        ...XO...
        ...OX...
        ........
        ........
        ........";

    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard opening: a diagonal pair for each side on the centre square.
    pub fn opening() -> Self {
        let mut board = Self::empty();
        board[BoardPos::new(3, 3)] = Cell::Player1;
        board[BoardPos::new(4, 4)] = Cell::Player1;
        board[BoardPos::new(3, 4)] = Cell::Player2;
        board[BoardPos::new(4, 3)] = Cell::Player2;
        board
    }

    pub fn get(&self, pos: BoardPos) -> Option<Cell> {
        if pos.is_valid() {
            return Some(self[pos]);
        }

        None
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count()
    }

    pub fn score(&self) -> Score {
        Score {
            player1: self.count(Cell::Player1),
            player2: self.count(Cell::Player2),
        }
    }

    /// All positions in row-major order.
    pub fn positions() -> impl Iterator<Item = BoardPos> {
        (0..BOARD_SIZE as CoordTyp)
            .flat_map(|row| (0..BOARD_SIZE as CoordTyp).map(move |col| BoardPos::new(row, col)))
    }

    pub fn to_notation(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::opening()
    }
}

impl Index<BoardPos> for Board {
    type Output = Cell;

    fn index(&self, index: BoardPos) -> &Self::Output {
        &self.cells[index.row as usize][index.col as usize]
    }
}

impl IndexMut<BoardPos> for Board {
    fn index_mut(&mut self, index: BoardPos) -> &mut Self::Output {
        &mut self.cells[index.row as usize][index.col as usize]
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut board = Self::empty();
        let mut cells = s.chars().filter(|c| !c.is_whitespace());

        for pos in Board::positions() {
            let c = cells
                .next()
                .with_context(|| format!("Board notation ended early at {pos}"))?;
            board[pos] = Cell::from_char(c)?;
        }

        if let Some(c) = cells.next() {
            return Err(anyhow!("Board notation has trailing cell: {c}"));
        }

        Ok(board)
    }
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
            Cell::Empty => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Player1 => 'X',
            Cell::Player2 => 'O',
            Cell::Empty => '.',
        }
    }

    pub fn from_char(c: char) -> Result<Self> {
        Ok(match c {
            'X' | 'x' => Cell::Player1,
            'O' | 'o' => Cell::Player2,
            '.' | '-' => Cell::Empty,
            _ => return Err(anyhow!("Invalid cell character: {c}")),
        })
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            _ => write!(f, "{}", self.to_char()),
        }
    }
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::Player1 => Cell::Player1,
            Player::Player2 => Cell::Player2,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Player1 => write!(f, "Player 1 (X)"),
            Player::Player2 => write!(f, "Player 2 (O)"),
        }
    }
}

impl Score {
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }

    pub fn empty(&self) -> usize {
        CELL_COUNT - self.player1 - self.player2
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} : {} O", self.player1, self.player2)
    }
}

fn char_to_col(c: char) -> Result<CoordTyp> {
    match c.to_ascii_lowercase() {
        f @ 'a'..='h' => Ok(f as CoordTyp - b'a'),
        _ => Err(anyhow!("Invalid file: {c}")),
    }
}

fn char_to_row(c: char) -> Result<CoordTyp> {
    match c {
        r @ '1'..='8' => Ok(r as CoordTyp - b'1'),
        _ => Err(anyhow!("Invalid rank: {c}")),
    }
}

/// A square on the board. Row 0 is the top row, rendered as rank 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, PartialOrd, Ord)]
pub struct BoardPos {
    pub row: CoordTyp,
    pub col: CoordTyp,
}

impl BoardPos {
    pub const fn new(row: CoordTyp, col: CoordTyp) -> Self {
        Self { row, col }
    }

    /// Builds a position from caller-supplied coordinates, rejecting anything off the board.
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            return Some(Self::new(row as CoordTyp, col as CoordTyp));
        }

        None
    }

    pub const fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    pub const fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub fn add_offset(&self, offset: (CoordOffsetTyp, CoordOffsetTyp)) -> Option<Self> {
        let p = Self {
            row: self.row.checked_add_signed(offset.0)?,
            col: self.col.checked_add_signed(offset.1)?,
        };

        if !p.is_valid() {
            return None;
        }

        Some(p)
    }
}

impl Display for BoardPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for BoardPos {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(anyhow!("Invalid board position: {s}"));
        };

        Ok(Self {
            row: char_to_row(rank)?,
            col: char_to_col(file)?,
        })
    }
}
