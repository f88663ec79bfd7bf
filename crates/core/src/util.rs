use std::ops::Index;

use crate::game::BoardPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitBoard(pub u64);

impl BitBoard {
    pub fn set(&mut self, pos: BoardPos, value: bool) {
        if value {
            self.0 |= 1u64 << pos.index();
        } else {
            self.0 &= !(1u64 << pos.index());
        }
    }

    pub fn get(&self, pos: BoardPos) -> bool {
        (self.0 >> pos.index()) & 1 == 1
    }

    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl Index<BoardPos> for BitBoard {
    type Output = bool;

    fn index(&self, index: BoardPos) -> &Self::Output {
        if self.get(index) {
            &true
        } else {
            &false
        }
    }
}
