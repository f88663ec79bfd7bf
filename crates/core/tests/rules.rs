#[cfg(test)]
mod rules {
    use std::str::FromStr;

    use reversi_core::{
        ai::Tier,
        game::{Board, BoardPos, Cell, Player, Score},
        session::{GameConfig, GameState},
    };

    #[test]
    fn opening_position() {
        let state = GameState::new();
        let occupied = Board::positions()
            .filter(|&p| !state.board()[p].is_empty())
            .count();
        assert_eq!(occupied, 4);
        assert_eq!(state.score(), Score { player1: 2, player2: 2 });
        assert_eq!(state.current_player(), Player::Player1);
        assert!(!state.is_game_over());
    }

    #[test]
    fn opening_move_flips_single_disc() {
        let mut state = GameState::new();
        assert!(state.apply_move(2, 4));
        assert_eq!(state.board()[BoardPos::new(3, 4)], Cell::Player1);
        assert_eq!(state.score(), Score { player1: 4, player2: 1 });
        assert_eq!(state.board().count(Cell::Empty), 59);
    }

    #[test]
    fn illegal_move_is_identity() {
        let board = Board::from_str(
            "
            ........
            ........
            ..O.....
            ...XO...
            ...OXX..
            ........
            ........
            ........",
        )
        .unwrap();
        let mut state = GameState::from_board(board, Player::Player2, GameConfig::default());
        let before = state.clone();

        for pos in Board::positions() {
            if state.is_legal_move(Player::Player2, pos.row as usize, pos.col as usize) {
                continue;
            }
            assert!(!state.play(pos));
            assert_eq!(state, before, "{pos} changed the state");
        }
    }

    #[test]
    fn novice_against_expert_finishes() {
        let mut state = GameState::with_config(GameConfig::vs_computer(Tier::Expert));
        let mut plies = 0;

        while !state.is_game_over() {
            let pos = if state.awaiting_ai() {
                state.select_ai_move()
            } else {
                Tier::Novice.engine().best_move(&state)
            };

            match pos {
                Some(pos) => assert!(state.play(pos)),
                None => assert!(state.pass_turn() || state.is_game_over()),
            }

            let score = state.score();
            assert_eq!(score.player1 + score.player2 + state.board().count(Cell::Empty), 64);
            plies += 1;
            assert!(plies < 128);
        }

        assert!(state.select_ai_move().is_none());
    }
}
