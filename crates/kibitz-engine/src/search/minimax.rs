//! Minimax with alpha-beta pruning.
//!
//! The maximizing side is fixed for the whole tree: it is the perspective
//! the search was started for, and every static score is taken from that
//! perspective. The minimizing side is its opponent.

use kibitz_core::{Color, GameState, Move};

use crate::eval::{WIN_SCORE, evaluate};

use super::control::SearchControl;

/// Score bound larger than any reachable score.
pub const INF: i32 = 999_999;

/// Mutable state threaded through one search.
pub(super) struct SearchContext<'a> {
    /// The maximizing color.
    pub perspective: Color,
    /// Nodes visited so far.
    pub nodes: u64,
    /// Stop flag and deadline.
    pub control: &'a SearchControl,
    /// Set once the control asked us to stop; every score after that is garbage.
    pub aborted: bool,
}

impl<'a> SearchContext<'a> {
    pub(super) fn new(perspective: Color, control: &'a SearchControl) -> Self {
        Self {
            perspective,
            nodes: 0,
            control,
            aborted: false,
        }
    }
}

/// Score of a finished game with `depth` plies of search remaining.
///
/// Wins grow and losses shrink with remaining depth, so faster wins and
/// slower losses are preferred.
fn terminal_score(state: &GameState, depth: u8, perspective: Color) -> i32 {
    match state.winner().color() {
        Some(winner) if winner == perspective => WIN_SCORE + depth as i32,
        Some(_) => -WIN_SCORE - depth as i32,
        None => 0,
    }
}

/// Alpha-beta minimax to `depth` plies below `state`.
pub(super) fn minimax(
    state: &GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.nodes += 1;

    if ctx.aborted || ctx.control.should_stop(ctx.nodes) {
        ctx.aborted = true;
        return 0;
    }

    if depth == 0 {
        return evaluate(state, ctx.perspective);
    }

    if state.is_game_over() {
        return terminal_score(state, depth, ctx.perspective);
    }

    if maximizing {
        let mut best = -INF;
        for mv in state.legal_moves(ctx.perspective) {
            let mut child = state.clone();
            child.apply(mv);

            let score = minimax(&child, depth - 1, alpha, beta, false, ctx);
            best = best.max(score);
            alpha = alpha.max(score);

            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INF;
        for mv in state.legal_moves(ctx.perspective.flip()) {
            let mut child = state.clone();
            child.apply(mv);

            let score = minimax(&child, depth - 1, alpha, beta, true, ctx);
            best = best.min(score);
            beta = beta.min(score);

            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Score every root move with a full window and keep the first one with the
/// strictly greatest score.
///
/// Returns `None` when there are no root moves or the search was aborted.
pub(super) fn search_root(
    state: &GameState,
    depth: u8,
    ctx: &mut SearchContext<'_>,
) -> Option<(Move, i32)> {
    let moves = state.legal_moves(state.side_to_move());
    let mut best = (*moves.first()?, -INF);

    for mv in moves {
        let mut child = state.clone();
        child.apply(mv);

        let score = minimax(&child, depth.saturating_sub(1), -INF, INF, false, ctx);
        if ctx.aborted {
            return None;
        }
        if score > best.1 {
            best = (mv, score);
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    use kibitz_core::{Board, Color, GameState, Move};

    use super::*;

    /// Plain minimax without pruning.
    fn full_minimax(state: &GameState, depth: u8, maximizing: bool, perspective: Color) -> i32 {
        if depth == 0 {
            return evaluate(state, perspective);
        }
        if state.is_game_over() {
            return terminal_score(state, depth, perspective);
        }
        let mover = if maximizing { perspective } else { perspective.flip() };
        let scores = state.legal_moves(mover).into_iter().map(|mv| {
            let mut child = state.clone();
            child.apply(mv);
            full_minimax(&child, depth - 1, !maximizing, perspective)
        });
        if maximizing {
            scores.max().unwrap_or(-INF)
        } else {
            scores.min().unwrap_or(INF)
        }
    }

    fn full_root_value(state: &GameState, depth: u8) -> i32 {
        let perspective = state.side_to_move();
        state
            .legal_moves(perspective)
            .into_iter()
            .map(|mv| {
                let mut child = state.clone();
                child.apply(mv);
                full_minimax(&child, depth - 1, false, perspective)
            })
            .max()
            .unwrap()
    }

    fn unbounded() -> SearchControl {
        SearchControl::new_unbounded(Arc::new(AtomicBool::new(false)))
    }

    fn state(placement: &str, side: Color) -> GameState {
        GameState::from_board(placement.parse::<Board>().unwrap(), side)
    }

    fn mv(s: &str) -> Move {
        Move::from_coordinates(s).unwrap()
    }

    #[test]
    fn pruning_preserves_root_value_depth_2() {
        let mut game = GameState::new();
        for m in ["e2e4", "e7e5"] {
            game.apply(mv(m));
        }
        let control = unbounded();
        let mut ctx = SearchContext::new(game.side_to_move(), &control);
        let (_, score) = search_root(&game, 2, &mut ctx).unwrap();
        assert_eq!(score, full_root_value(&game, 2));
    }

    #[test]
    fn pruning_preserves_root_value_depth_3() {
        let game = state("4k3/3p4/8/8/8/8/4P3/R3K3", Color::White);
        let control = unbounded();
        let mut ctx = SearchContext::new(Color::White, &control);
        let (best, score) = search_root(&game, 3, &mut ctx).unwrap();
        assert_eq!(score, full_root_value(&game, 3));

        // The chosen move really achieves that value.
        let mut child = game.clone();
        child.apply(best);
        assert_eq!(full_minimax(&child, 2, false, Color::White), score);
    }

    #[test]
    fn finds_mate_in_one() {
        let game = state("6k1/5ppp/8/8/8/8/8/R5K1", Color::White);
        for depth in 1..=2 {
            let control = unbounded();
            let mut ctx = SearchContext::new(Color::White, &control);
            let (best, score) = search_root(&game, depth, &mut ctx).unwrap();
            assert_eq!(best, mv("a1a8"), "depth {depth}");
            assert!(score >= WIN_SCORE);
        }
    }

    #[test]
    fn black_grabs_hanging_rook() {
        let game = state("k7/8/8/8/3q3R/8/8/1K6", Color::Black);
        assert!(!game.is_in_check(Color::White));
        let control = unbounded();
        let mut ctx = SearchContext::new(Color::Black, &control);
        let (best, _) = search_root(&game, 2, &mut ctx).unwrap();
        assert_eq!(best, mv("d4h4"));
        assert!(ctx.nodes > 0);
    }

    #[test]
    fn faster_mate_scores_higher() {
        let mut mated = state("6k1/5ppp/8/8/8/8/8/R5K1", Color::White);
        mated.apply(mv("a1a8"));
        assert_eq!(terminal_score(&mated, 3, Color::White), WIN_SCORE + 3);
        assert_eq!(terminal_score(&mated, 1, Color::White), WIN_SCORE + 1);
        assert_eq!(terminal_score(&mated, 3, Color::Black), -WIN_SCORE - 3);
    }

    #[test]
    fn stopped_search_aborts() {
        let control = unbounded();
        control.stop();
        let mut ctx = SearchContext::new(Color::White, &control);
        assert!(search_root(&GameState::new(), 3, &mut ctx).is_none());
        assert!(ctx.aborted);
    }

    #[test]
    fn ties_keep_first_move() {
        // Bare kings: several king moves score the same.
        let game = state("k7/8/8/8/8/8/8/K7", Color::White);
        let control = unbounded();
        let mut ctx = SearchContext::new(Color::White, &control);
        let moves = game.legal_moves(Color::White);
        let (best, score) = search_root(&game, 1, &mut ctx).unwrap();
        let first_with_score = moves
            .iter()
            .copied()
            .find(|&m| {
                let mut child = game.clone();
                child.apply(m);
                evaluate(&child, Color::White) == score
            })
            .unwrap();
        assert_eq!(best, first_with_score);
    }
}
