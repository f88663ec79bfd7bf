use game::BoardPos;
use session::GameState;

pub mod ai;
pub mod console;
pub mod debug;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod renderer;
pub mod session;
pub mod util;

/// Anything that can pick a move for the side to move. `None` means the side
/// to move has nothing legal to play.
pub trait Engine {
    fn best_move(&self, state: &GameState) -> Option<BoardPos>;
}
