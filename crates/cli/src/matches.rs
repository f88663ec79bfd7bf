use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use random_bot::RandomEngine;
use reversi_core::{
    ai::{ExpertEngine, NoviceEngine},
    game::Player,
    session::GameState,
    Engine,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    Novice,
    Expert,
    Random,
}

impl EngineKind {
    pub fn build(self, seed: Option<u64>) -> Box<dyn Engine> {
        match self {
            EngineKind::Novice => Box::new(NoviceEngine),
            EngineKind::Expert => Box::new(ExpertEngine),
            EngineKind::Random => Box::new(match seed {
                Some(seed) => RandomEngine::seeded(seed),
                None => RandomEngine::new(),
            }),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
    pub black_discs: usize,
    pub white_discs: usize,
}

impl Tally {
    pub fn games(&self) -> usize {
        self.black_wins + self.white_wins + self.draws
    }

    fn record(&mut self, state: &GameState) {
        match state.winner() {
            Some(Player::Player1) => self.black_wins += 1,
            Some(Player::Player2) => self.white_wins += 1,
            None => self.draws += 1,
        }
        self.black_discs += state.score().player1;
        self.white_discs += state.score().player2;
    }
}

impl Display for Tally {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "games:       {}", self.games())?;
        writeln!(f, "black wins:  {}", self.black_wins)?;
        writeln!(f, "white wins:  {}", self.white_wins)?;
        writeln!(f, "draws:       {}", self.draws)?;
        write!(f, "discs:       {} - {}", self.black_discs, self.white_discs)
    }
}

/// Plays one game to the end. Player 1 moves first.
pub fn play_game(black: &dyn Engine, white: &dyn Engine) -> GameState {
    let mut state = GameState::new();

    while !state.is_game_over() {
        let engine = match state.current_player() {
            Player::Player1 => black,
            Player::Player2 => white,
        };

        match engine.best_move(&state) {
            Some(pos) => {
                state.play(pos);
            }
            None => {
                debug!(player = ?state.current_player(), "no move, passing");
                state.pass_turn();
            }
        }
    }

    state
}

pub fn run_match(black: EngineKind, white: EngineKind, games: usize, seed: Option<u64>) -> Tally {
    let black_engine = black.build(seed);
    let white_engine = white.build(seed.map(|s| s.wrapping_add(1)));
    let mut tally = Tally::default();

    for game in 0..games {
        let state = play_game(black_engine.as_ref(), white_engine.as_ref());
        info!(game, score = %state.score(), winner = ?state.winner(), "game finished");
        tally.record(&state);
    }

    tally
}
