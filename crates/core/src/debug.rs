use crate::{movegen::MoveGenDiagnostics, session::GameState};

/// Counts the positions reachable in exactly `depth` plies. A forced pass
/// takes up a ply; a finished game counts as a single leaf.
pub fn gen_node_nums(state: &GameState, depth: usize) -> (MoveGenDiagnostics, usize) {
    let mut diagnostics = MoveGenDiagnostics::default();

    if state.is_game_over() {
        diagnostics.game_overs += 1;
        return (diagnostics, 1);
    }

    if depth == 0 {
        return (diagnostics, 1);
    }

    let moves = state.enumerate_moves(state.current_player());

    if moves.is_empty() {
        let mut state_clone = state.clone();
        if state_clone.pass_turn() {
            diagnostics.passes += 1;
        }
        let (d, c) = gen_node_nums(&state_clone, depth - 1);
        diagnostics += d;
        return (diagnostics, c);
    }

    let mut node_count = 0;

    for m in moves {
        let mut state_clone = state.clone();
        state_clone.play(m.pos);
        diagnostics.moves += 1;
        diagnostics.flips += m.flips;
        let (d, c) = gen_node_nums(&state_clone, depth - 1);
        node_count += c;
        diagnostics += d;
    }

    (diagnostics, node_count)
}
