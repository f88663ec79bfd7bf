use std::fmt::{Display, Formatter};

use anyhow::anyhow;

use crate::{
    game::{Board, BoardPos, Player},
    movegen::ScoredMove,
    session::GameState,
    Engine,
};

/// The side the computer takes in a game against a human.
pub const AI_PLAYER: Player = Player::Player2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    #[default]
    Novice,
    Expert,
}

impl Tier {
    pub fn engine(self) -> &'static dyn Engine {
        match self {
            Tier::Novice => &NoviceEngine,
            Tier::Expert => &ExpertEngine,
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Novice => write!(f, "novice"),
            Tier::Expert => write!(f, "expert"),
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "novice" => Ok(Tier::Novice),
            "expert" => Ok(Tier::Expert),
            _ => Err(anyhow!("Invalid tier: {s}")),
        }
    }
}

/// Keeps the first move with the highest key. Later moves must be strictly
/// better to replace it, so ties go to the earliest move in row-major order.
fn first_max_by_key(moves: &[ScoredMove], key: impl Fn(&ScoredMove) -> isize) -> Option<BoardPos> {
    let mut best: Option<(BoardPos, isize)> = None;

    for m in moves {
        let value = key(m);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((m.pos, value)),
        }
    }

    best.map(|(pos, _)| pos)
}

fn best_flip_count(board: &Board, player: Player) -> usize {
    board
        .enumerate_moves(player)
        .iter()
        .map(|m| m.flips)
        .max()
        .unwrap_or(0)
}

/// Flips gained by `pos` minus the opponent's best flip count, both measured on
/// `board` as it stands before the move.
pub fn evaluate_move(board: &Board, player: Player, pos: BoardPos) -> isize {
    board.flip_count(player, pos) as isize - best_flip_count(board, player.opponent()) as isize
}

/// Takes whichever move flips the most discs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoviceEngine;

impl Engine for NoviceEngine {
    fn best_move(&self, state: &GameState) -> Option<BoardPos> {
        let moves = state.enumerate_moves(state.current_player());
        first_max_by_key(&moves, |m| m.flips as isize)
    }
}

/// Takes the move with the best margin over the opponent's strongest reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpertEngine;

impl Engine for ExpertEngine {
    fn best_move(&self, state: &GameState) -> Option<BoardPos> {
        let player = state.current_player();
        let moves = state.enumerate_moves(player);
        // The reply is read off the current board, so it is the same for every candidate.
        let reply = best_flip_count(state.board(), player.opponent()) as isize;
        first_max_by_key(&moves, |m| m.flips as isize - reply)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::{
        game::{Board, BoardPos, Player},
        session::{GameConfig, GameState},
        Engine,
    };

    use super::{evaluate_move, ExpertEngine, NoviceEngine, Tier};

    fn state(board: &str, player: Player, tier: Tier) -> GameState {
        GameState::from_board(
            Board::from_str(board).unwrap(),
            player,
            GameConfig::vs_computer(tier),
        )
    }

    const THREE_FLIP: &str = "
        ........
        .XOOO...
        ........
        ........
        ...XO...
        ........
        ........
        ........";

    #[test]
    fn novice_takes_biggest_capture() {
        let state = state(THREE_FLIP, Player::Player1, Tier::Novice);
        let moves = state.enumerate_moves(Player::Player1);
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].pos, BoardPos::new(1, 5));
        assert_eq!(moves[0].flips, 3);
        assert_eq!(moves[1].flips, 1);

        assert_eq!(state.select_ai_move(), Some(BoardPos::new(1, 5)));
        assert_eq!(NoviceEngine.best_move(&state), Some(BoardPos::new(1, 5)));
    }

    #[test]
    fn ties_go_to_first_in_row_major_order() {
        let opening = GameState::new();
        assert_eq!(NoviceEngine.best_move(&opening), Some(BoardPos::new(2, 4)));
        assert_eq!(ExpertEngine.best_move(&opening), Some(BoardPos::new(2, 4)));
    }

    #[test]
    fn expert_scores_against_current_board_reply() {
        let state = state(THREE_FLIP, Player::Player1, Tier::Expert);
        // O's replies are counted on the board before X moves.
        let reply = state
            .enumerate_moves(Player::Player2)
            .iter()
            .map(|m| m.flips)
            .max()
            .unwrap_or(0) as isize;

        for m in state.enumerate_moves(Player::Player1) {
            assert_eq!(state.evaluate_move(m.pos), m.flips as isize - reply);
        }
        assert_eq!(state.select_ai_move(), Some(BoardPos::new(1, 5)));
    }

    #[test]
    fn evaluate_move_without_opponent_reply() {
        let board = Board::from_str(
            "
            X.......
            O.......
            ........
            ........
            ........
            ........
            ........
            ........",
        )
        .unwrap();
        assert!(!board.has_any_legal_move(Player::Player2));
        assert_eq!(evaluate_move(&board, Player::Player1, BoardPos::new(2, 0)), 1);
        // Illegal target scores as no gain.
        assert_eq!(evaluate_move(&board, Player::Player1, BoardPos::new(5, 5)), 0);
    }

    #[test]
    fn expert_agrees_with_novice_over_a_game() {
        let mut state = GameState::new();
        while !state.is_game_over() {
            let novice = NoviceEngine.best_move(&state);
            let expert = ExpertEngine.best_move(&state);
            assert_eq!(novice, expert);

            match novice {
                Some(pos) => assert!(state.play(pos)),
                None => {
                    state.pass_turn();
                }
            }
        }
    }

    #[test]
    fn no_moves_selects_nothing() {
        let state = state(
            "
            XX......
            ........
            ........
            ........
            ........
            ........
            ........
            ........",
            Player::Player2,
            Tier::Expert,
        );
        assert_eq!(state.select_ai_move(), None);
        assert_eq!(NoviceEngine.best_move(&state), None);
    }

    #[test]
    fn tier_names() {
        assert_eq!(Tier::from_str("Expert").unwrap(), Tier::Expert);
        assert_eq!(Tier::Novice.to_string(), "novice");
        assert!(Tier::from_str("grandmaster").is_err());
    }
}
