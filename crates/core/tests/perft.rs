// http://www.aartbik.com/MISC/reversi.html

#[cfg(test)]
mod perft {
    use paste::paste;
    use reversi_core::{debug, session::GameState};

    macro_rules! perft_test {
        ($i:expr, $name:ident) => {
            paste! {
                #[test]
                fn [<$name _ $i>]() {
                    let (diagnostics, node_count) = debug::gen_node_nums(&GameState::new(), $i);
                    println!("{diagnostics:?}");
                    assert_eq!(node_count, OPENING_NODES[$i - 1]);
                }
            }
        };
    }

    const OPENING_NODES: [usize; 9] = [4, 12, 56, 244, 1396, 8200, 55092, 390_216, 3_005_288];

    perft_test!(1, opening);
    perft_test!(2, opening);
    perft_test!(3, opening);
    perft_test!(4, opening);
    perft_test!(5, opening);
    perft_test!(6, opening);
    perft_test!(7, opening);
    perft_test!(8, opening);
    // First depth where passes and finished games show up.
    perft_test!(9, opening);

    #[test]
    fn diagnostics_count_moves() {
        let (diagnostics, node_count) = debug::gen_node_nums(&GameState::new(), 2);
        assert_eq!(node_count, 12);
        // 4 first moves plus 12 replies, every one flipping a single disc.
        assert_eq!(diagnostics.moves, 16);
        assert_eq!(diagnostics.flips, 16);
        assert_eq!(diagnostics.passes, 0);
        assert_eq!(diagnostics.total(), 16);
    }
}
