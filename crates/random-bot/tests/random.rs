#[cfg(test)]
mod random {
    use random_bot::RandomEngine;
    use reversi_core::{
        game::{Cell, Player},
        session::GameState,
        Engine,
    };

    const GAMES: u64 = 500;

    fn play_out(bot: &RandomEngine) -> (GameState, usize) {
        let mut state = GameState::new();
        let mut moves = 0;

        while !state.is_game_over() {
            let before = state.clone();

            match bot.best_move(&state) {
                Some(pos) => {
                    let mover = state.current_player();
                    assert!(state.is_legal_move(mover, pos.row as usize, pos.col as usize));
                    assert!(state.play(pos));

                    let (old, new) = (before.score(), state.score());
                    assert!(new.of(mover) >= old.of(mover) + 2);
                    assert!(new.of(mover.opponent()) < old.of(mover.opponent()));
                    assert_eq!(new.empty() + 1, old.empty());
                    assert!(
                        state.is_game_over() || state.current_player() == mover.opponent(),
                        "turn did not alternate"
                    );
                    moves += 1;
                }
                None => {
                    assert!(!state.has_any_legal_move(state.current_player()));
                    state.pass_turn();
                    assert!(state.is_game_over() || state.current_player() != before.current_player());
                }
            }

            let score = state.score();
            assert_eq!(
                score.player1 + score.player2 + state.board().count(Cell::Empty),
                64
            );
            assert_eq!(score, state.board().score());
        }

        (state, moves)
    }

    #[test]
    fn random_games_keep_invariants() {
        let bot = RandomEngine::seeded(7);
        let mut total_moves = 0;
        let mut wins = [0usize; 3];

        for g in 0..GAMES {
            let (state, moves) = play_out(&bot);
            assert!(moves <= 60);
            assert!(!state.has_any_legal_move(Player::Player1));
            assert!(!state.has_any_legal_move(Player::Player2));
            assert_eq!(bot.best_move(&state), None);

            match state.winner() {
                Some(Player::Player1) => wins[0] += 1,
                Some(Player::Player2) => wins[1] += 1,
                None => wins[2] += 1,
            }

            total_moves += moves;
            if g % 100 == 0 {
                println!("{state}");
            }
        }

        println!("Total moves {total_moves}, results {wins:?}");
        assert_eq!(wins.iter().sum::<usize>(), GAMES as usize);
    }

    #[test]
    fn seeded_engines_agree() {
        let a = RandomEngine::seeded(42);
        let b = RandomEngine::seeded(42);
        let mut state = GameState::new();

        for _ in 0..20 {
            let (ma, mb) = (a.best_move(&state), b.best_move(&state));
            assert_eq!(ma, mb);
            match ma {
                Some(pos) => {
                    state.play(pos);
                }
                None => {
                    state.pass_turn();
                }
            }
        }
    }
}
