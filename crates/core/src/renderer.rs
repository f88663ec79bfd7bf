use std::fmt::Display;

use crate::{
    game::{Board, BoardPos, CoordTyp, BOARD_SIZE},
    session::GameState,
    util::BitBoard,
};

const ROW_SEPARATOR: &str = "   +---+---+---+---+---+---+---+---+";
const FILE_LABELS: &str = "     a   b   c   d   e   f   g   h";

impl Board {
    /// Draws the board, marking every position in `hints` with `*`.
    fn render(&self, f: &mut std::fmt::Formatter<'_>, hints: BitBoard) -> std::fmt::Result {
        writeln!(f, "{FILE_LABELS}")?;
        for row in 0..BOARD_SIZE as CoordTyp {
            writeln!(f, "{ROW_SEPARATOR}")?;
            write!(f, " {} |", row + 1)?;
            for col in 0..BOARD_SIZE as CoordTyp {
                let pos = BoardPos::new(row, col);
                if hints[pos] {
                    write!(f, " * |")?;
                } else {
                    write!(f, " {} |", self[pos])?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "{ROW_SEPARATOR}")
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.render(f, BitBoard::default())
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hints = if self.is_game_over() {
            BitBoard::default()
        } else {
            self.board().legal_move_mask(self.current_player())
        };
        self.board().render(f, hints)?;
        writeln!(f)?;
        writeln!(f, "Score: {}", self.score())?;

        if self.is_game_over() {
            match self.winner() {
                Some(winner) => writeln!(f, "Game over! {winner} wins")?,
                None => writeln!(f, "Game over! It's a draw")?,
            }
        } else {
            writeln!(f, "To move: {}", self.current_player())?;
        }

        Ok(())
    }
}
