//! The game engine: one owned [`GameState`] per running session.
//!
//! Every mutation goes through [`GameState::apply_move`], [`GameState::pass_turn`],
//! [`GameState::play_ai_move`] or [`GameState::reset`]. Everything else is a read.
//! Requests that break the rules are ignored rather than reported, so a caller
//! can forward raw user input without checking it first.

use derivative::Derivative;
use tracing::{debug, info, instrument};

use crate::{
    ai::{self, Tier},
    game::{Board, BoardPos, Player, Score},
    movegen::ScoredMove,
};

/// Which side the computer plays and how strongly.
#[derive(Derivative, Clone, Copy, PartialEq, Eq, Hash)]
#[derivative(Debug, Default)]
pub struct GameConfig {
    pub vs_computer: bool,
    pub tier: Tier,
}

impl GameConfig {
    pub fn vs_computer(tier: Tier) -> Self {
        Self {
            vs_computer: true,
            tier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    GameOver,
}

#[derive(Derivative)]
#[derivative(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    board: Board,
    #[derivative(Default(value = "Player::Player1"))]
    current_player: Player,
    #[derivative(Default(value = "Score { player1: 2, player2: 2 }"))]
    score: Score,
    game_over: bool,
    #[derivative(PartialEq = "ignore")]
    config: GameConfig,
}

impl GameState {
    /// The opening position with Player 1 to move.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Starts from an arbitrary position. The score and the game-over flag are
    /// derived from `board`.
    pub fn from_board(board: Board, current_player: Player, config: GameConfig) -> Self {
        let game_over = !board.has_any_legal_move(Player::Player1)
            && !board.has_any_legal_move(Player::Player2);

        Self {
            score: board.score(),
            board,
            current_player,
            game_over,
            config,
        }
    }

    #[instrument(skip(self))]
    pub fn reset(&mut self, config: GameConfig) {
        *self = Self::with_config(config);
        info!("new game");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else {
            Phase::InProgress
        }
    }

    /// The player with more discs once the game is over. `None` while the game
    /// is running or on a draw.
    pub fn winner(&self) -> Option<Player> {
        if !self.game_over {
            return None;
        }

        match self.score.player1.cmp(&self.score.player2) {
            std::cmp::Ordering::Greater => Some(Player::Player1),
            std::cmp::Ordering::Less => Some(Player::Player2),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn is_legal_move(&self, player: Player, row: usize, col: usize) -> bool {
        BoardPos::try_new(row, col).is_some_and(|pos| self.board.is_legal_move(player, pos))
    }

    pub fn has_any_legal_move(&self, player: Player) -> bool {
        self.board.has_any_legal_move(player)
    }

    pub fn enumerate_moves(&self, player: Player) -> Vec<ScoredMove> {
        self.board.enumerate_moves(player)
    }

    /// Places a disc for the current player. Returns `false` and leaves the
    /// state untouched when the move is off the board, occupied, illegal, or
    /// the game has already ended.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        if self.game_over {
            debug!("game is over");
            return false;
        }

        let Some(pos) = BoardPos::try_new(row, col) else {
            debug!("off the board");
            return false;
        };

        if !self.board.is_legal_move(self.current_player, pos) {
            debug!(%pos, "illegal move");
            return false;
        }

        let flipped = self.board.apply_flips(self.current_player, pos);
        self.score = self.board.score();
        debug!(%pos, flipped, score = %self.score, "move applied");

        if !self.board.has_any_legal_move(Player::Player1)
            && !self.board.has_any_legal_move(Player::Player2)
        {
            self.game_over = true;
            info!(score = %self.score, winner = ?self.winner(), "game over");
        } else {
            self.current_player = self.current_player.opponent();
        }

        true
    }

    pub fn play(&mut self, pos: BoardPos) -> bool {
        self.apply_move(pos.row as usize, pos.col as usize)
    }

    /// Hands the turn over when the side to move is stuck. Returns `true` if
    /// the turn changed. Marks the game over if neither side can move.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn pass_turn(&mut self) -> bool {
        if self.game_over || self.board.has_any_legal_move(self.current_player) {
            return false;
        }

        if !self.board.has_any_legal_move(self.current_player.opponent()) {
            self.game_over = true;
            info!(score = %self.score, winner = ?self.winner(), "game over");
            return false;
        }

        self.current_player = self.current_player.opponent();
        debug!(next = ?self.current_player, "turn passed");
        true
    }

    /// Discs flipped by `pos` minus the best reply the opponent has on the
    /// current board.
    pub fn evaluate_move(&self, pos: BoardPos) -> isize {
        ai::evaluate_move(&self.board, self.current_player, pos)
    }

    /// The configured tier's choice for the side to move.
    pub fn select_ai_move(&self) -> Option<BoardPos> {
        if self.game_over {
            return None;
        }

        self.config.tier.engine().best_move(self)
    }

    /// True when the computer owns the turn and should be asked to move.
    pub fn awaiting_ai(&self) -> bool {
        self.config.vs_computer && self.current_player == ai::AI_PLAYER && !self.game_over
    }

    /// Selects and plays the configured tier's move. Does nothing if there is
    /// no move to make.
    #[instrument(skip(self), fields(player = ?self.current_player, tier = ?self.config.tier))]
    pub fn play_ai_move(&mut self) -> Option<BoardPos> {
        let pos = self.select_ai_move()?;
        debug!(%pos, "ai move");
        self.play(pos).then_some(pos)
    }
}
