use std::cell::RefCell;

use rand::{rngs::StdRng, Rng, SeedableRng};
use reversi_core::{game::BoardPos, session::GameState, Engine};

/// Plays a uniformly random legal move.
pub struct RandomEngine {
    rng: RefCell<StdRng>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn best_move(&self, state: &GameState) -> Option<BoardPos> {
        let moves = state.enumerate_moves(state.current_player());
        if moves.is_empty() {
            return None;
        }

        let i = self.rng.borrow_mut().gen_range(0..moves.len());
        Some(moves[i].pos)
    }
}
