use crate::{
    game::{Board, BoardPos, CoordOffsetTyp, Player, DIRECTIONS},
    util::BitBoard,
};

/// A legal move together with the number of discs it would flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredMove {
    pub pos: BoardPos,
    pub flips: usize,
}

#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct MoveGenDiagnostics {
    pub moves: usize,
    pub flips: usize,
    pub passes: usize,
    pub game_overs: usize,
}

impl MoveGenDiagnostics {
    pub fn total(&self) -> usize {
        self.moves + self.passes + self.game_overs
    }
}

impl std::ops::Add for MoveGenDiagnostics {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            moves: self.moves + rhs.moves,
            flips: self.flips + rhs.flips,
            passes: self.passes + rhs.passes,
            game_overs: self.game_overs + rhs.game_overs,
        }
    }
}

impl std::ops::AddAssign for MoveGenDiagnostics {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl Board {
    /// Length of the opponent run bracketed by `player` when scanning from `pos`
    /// along `direction`, or 0 if the scan leaves the board or reaches an empty cell first.
    pub fn flips_in_direction(
        &self,
        player: Player,
        pos: BoardPos,
        direction: (CoordOffsetTyp, CoordOffsetTyp),
    ) -> usize {
        let opponent = player.opponent().cell();
        let mut run = 0;
        let mut current_pos = pos.add_offset(direction);

        while let Some(p) = current_pos {
            let cell = self[p];

            if cell == opponent {
                run += 1;
                current_pos = p.add_offset(direction);
                continue;
            }

            if cell == player.cell() {
                return run;
            }

            break;
        }

        0
    }

    /// Total discs flipped across every qualifying direction.
    pub fn flip_count(&self, player: Player, pos: BoardPos) -> usize {
        if !pos.is_valid() || !self[pos].is_empty() {
            return 0;
        }

        DIRECTIONS
            .iter()
            .map(|&dir| self.flips_in_direction(player, pos, dir))
            .sum()
    }

    pub fn is_legal_move(&self, player: Player, pos: BoardPos) -> bool {
        pos.is_valid()
            && self[pos].is_empty()
            && DIRECTIONS
                .iter()
                .any(|&dir| self.flips_in_direction(player, pos, dir) > 0)
    }

    pub fn has_any_legal_move(&self, player: Player) -> bool {
        Board::positions().any(|pos| self.is_legal_move(player, pos))
    }

    /// Every legal move for `player` in row-major order.
    pub fn enumerate_moves(&self, player: Player) -> Vec<ScoredMove> {
        Board::positions()
            .filter_map(|pos| {
                let flips = self.flip_count(player, pos);
                (flips > 0).then_some(ScoredMove { pos, flips })
            })
            .collect()
    }

    pub fn legal_move_mask(&self, player: Player) -> BitBoard {
        let mut mask = BitBoard::default();
        for pos in Board::positions() {
            mask.set(pos, self.is_legal_move(player, pos));
        }
        mask
    }

    /// Flips every bracketed run around `pos` and places the disc.
    /// Returns the number of discs flipped; nothing changes when the move is illegal.
    pub fn apply_flips(&mut self, player: Player, pos: BoardPos) -> usize {
        if !self.is_legal_move(player, pos) {
            return 0;
        }

        let mut flipped = 0;

        for &dir in DIRECTIONS.iter() {
            let run = self.flips_in_direction(player, pos, dir);
            let mut current_pos = pos;
            for _ in 0..run {
                // The scan above already proved these cells are on the board.
                let Some(p) = current_pos.add_offset(dir) else {
                    break;
                };
                self[p] = player.cell();
                current_pos = p;
            }
            flipped += run;
        }

        self[pos] = player.cell();
        flipped
    }
}
