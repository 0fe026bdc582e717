//! Move selection: alpha-beta minimax raced against a wall-clock deadline.

pub mod control;
mod minimax;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use kibitz_core::{Color, GameState, Move};

use crate::config::{Difficulty, SearchConfig};
use crate::error::{ConfigError, SearchError};

use control::SearchControl;
use minimax::{SearchContext, search_root};

pub use minimax::INF;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// First root move with the greatest score.
    pub best_move: Move,
    /// Score of `best_move` from the searching side's perspective.
    pub score: i32,
    /// Total nodes visited below the root.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u8,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// What a deadline-raced search produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The search finished in time.
    Found(SearchResult),
    /// The deadline fired first; `fallback` is the first legal move in
    /// enumeration order, offered as a usable but unsearched reply.
    TimedOut {
        /// First legal move.
        fallback: Move,
        /// Time waited before giving up.
        elapsed: Duration,
    },
}

impl SearchOutcome {
    /// The move to play: the search result or the fallback.
    pub fn chosen_move(&self) -> Move {
        match self {
            SearchOutcome::Found(result) => result.best_move,
            SearchOutcome::TimedOut { fallback, .. } => *fallback,
        }
    }

    /// Return `true` if the deadline fired before the search finished.
    pub fn is_timed_out(&self) -> bool {
        matches!(self, SearchOutcome::TimedOut { .. })
    }
}

/// Fixed-depth minimax searcher owning its configuration.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Create a searcher with the default configuration (depth 4, 30 s).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a searcher with an explicit configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Current search depth.
    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    /// Label of the current depth ("Easy" .. "Expert", or "Custom").
    pub fn difficulty_label(&self) -> &'static str {
        self.config.difficulty_label()
    }

    /// Set the search depth directly. Accepts 1..=10; on error the previous
    /// depth is kept.
    pub fn set_depth(&mut self, depth: u32) -> Result<(), ConfigError> {
        self.config = self.config.with_depth(depth)?;
        info!(depth, "search depth set");
        Ok(())
    }

    /// Set the depth from a difficulty name (easy, medium, hard, expert).
    pub fn set_difficulty(&mut self, name: &str) -> Result<Difficulty, ConfigError> {
        let difficulty: Difficulty = name.parse()?;
        self.config.depth = difficulty.depth();
        info!(%difficulty, depth = self.config.depth, "difficulty set");
        Ok(difficulty)
    }

    /// Set the wall-clock budget for [`best_move`](Self::best_move).
    pub fn set_think_time(&mut self, think_time: Duration) -> Result<(), ConfigError> {
        self.config = self.config.with_think_time(think_time)?;
        info!(?think_time, "think time set");
        Ok(())
    }

    /// Choose a move for the side to move, racing the configured think time.
    ///
    /// The search runs on a worker thread over its own copy of `state`; the
    /// caller blocks until the worker reports or the deadline fires. On
    /// timeout the worker is told to stop, its eventual result is discarded
    /// and the first legal move is returned as
    /// [`SearchOutcome::TimedOut`].
    pub fn best_move(&self, state: &GameState) -> Result<SearchOutcome, SearchError> {
        let fallback = root_fallback(state)?;
        let depth = self.config.depth;
        let think_time = self.config.think_time;
        let start = Instant::now();

        let stop = Arc::new(AtomicBool::new(false));
        let control = SearchControl::new_timed(Arc::clone(&stop), think_time);
        let (tx, rx) = mpsc::channel();
        let worker_state = state.clone();

        debug!(depth, ?think_time, side = %state.side_to_move(), "search started");
        thread::spawn(move || {
            let result = run_search(&worker_state, depth, &control);
            if result.is_none() && control.is_stopped() {
                debug!(elapsed_ms = control.elapsed().as_millis() as u64, "search worker stopped early");
            }
            // The receiver is gone if the deadline already fired.
            let _ = tx.send(result);
        });

        match rx.recv_timeout(think_time) {
            Ok(Some(result)) => {
                info!(
                    best = %result.best_move,
                    score = result.score,
                    nodes = result.nodes,
                    depth = result.depth,
                    elapsed_ms = result.elapsed.as_millis() as u64,
                    "search finished"
                );
                Ok(SearchOutcome::Found(result))
            }
            Ok(None) | Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                stop.store(true, Ordering::Release);
                let elapsed = start.elapsed();
                warn!(%fallback, elapsed_ms = elapsed.as_millis() as u64, "search timed out, playing first legal move");
                Ok(SearchOutcome::TimedOut { fallback, elapsed })
            }
        }
    }

    /// Run the search to completion on the calling thread, without a deadline.
    pub fn search_blocking(&self, state: &GameState) -> Result<SearchResult, SearchError> {
        root_fallback(state)?;
        let control = SearchControl::new_unbounded(Arc::new(AtomicBool::new(false)));
        run_search(state, self.config.depth, &control).ok_or(SearchError::NoLegalMoves)
    }
}

/// Reject terminal and move-less positions, returning the first legal move.
fn root_fallback(state: &GameState) -> Result<Move, SearchError> {
    if state.is_game_over() {
        return Err(SearchError::GameOver);
    }
    state
        .legal_moves(state.side_to_move())
        .first()
        .copied()
        .ok_or(SearchError::NoLegalMoves)
}

/// Search `state` for its side to move. `None` means the control stopped
/// the search before it finished.
fn run_search(state: &GameState, depth: u8, control: &SearchControl) -> Option<SearchResult> {
    let perspective: Color = state.side_to_move();
    let mut ctx = SearchContext::new(perspective, control);
    let (best_move, score) = search_root(state, depth, &mut ctx)?;
    Some(SearchResult {
        best_move,
        score,
        nodes: ctx.nodes,
        depth,
        elapsed: control.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use kibitz_core::{Board, Color, GameState, Move};

    use super::{SearchOutcome, Searcher};
    use crate::error::{ConfigError, SearchError};

    fn mv(s: &str) -> Move {
        Move::from_coordinates(s).unwrap()
    }

    fn mated_game() -> GameState {
        let mut game = GameState::new();
        for m in ["e2e4", "e7e5", "d1h5", "b8c6", "f1c4", "g8f6", "h5f7"] {
            let m = mv(m);
            game.validate_and_apply(m.from(), m.to()).unwrap();
        }
        game
    }

    #[test]
    fn difficulty_then_invalid_depth() {
        let mut searcher = Searcher::new();
        searcher.set_difficulty("hard").unwrap();
        assert_eq!(searcher.depth(), 6);
        assert_eq!(searcher.set_depth(11), Err(ConfigError::InvalidDepth { depth: 11 }));
        assert_eq!(searcher.depth(), 6);
        assert_eq!(searcher.difficulty_label(), "Hard");
    }

    #[test]
    fn invalid_difficulty_keeps_depth() {
        let mut searcher = Searcher::new();
        searcher.set_depth(3).unwrap();
        assert!(searcher.set_difficulty("impossible").is_err());
        assert_eq!(searcher.depth(), 3);
        assert_eq!(searcher.difficulty_label(), "Medium");
    }

    #[test]
    fn game_over_is_rejected() {
        let searcher = Searcher::new();
        assert_eq!(searcher.best_move(&mated_game()), Err(SearchError::GameOver));
        assert_eq!(searcher.search_blocking(&mated_game()), Err(SearchError::GameOver));
    }

    #[test]
    fn finds_mate_for_black() {
        let board: Board = "r5k1/8/8/8/8/8/5PPP/6K1".parse().unwrap();
        let game = GameState::from_board(board, Color::Black);
        let mut searcher = Searcher::new();
        searcher.set_depth(2).unwrap();
        match searcher.best_move(&game).unwrap() {
            SearchOutcome::Found(result) => {
                assert_eq!(result.best_move, mv("a8a1"));
                assert!(result.nodes > 0);
                assert_eq!(result.depth, 2);
            }
            other => panic!("expected a finished search, got {other:?}"),
        }
    }

    #[test]
    fn search_leaves_state_untouched() {
        let game = GameState::new();
        let before = game.clone();
        let mut searcher = Searcher::new();
        searcher.set_depth(2).unwrap();
        let result = searcher.search_blocking(&game).unwrap();
        assert!(game.is_legal(result.best_move));
        assert_eq!(game, before);
    }

    #[test]
    fn timeout_falls_back_to_first_legal_move() {
        let game = GameState::new();
        let mut searcher = Searcher::new();
        searcher.set_depth(10).unwrap();
        searcher.set_think_time(Duration::from_millis(50)).unwrap();
        let outcome = searcher.best_move(&game).unwrap();
        assert!(outcome.is_timed_out());
        assert_eq!(outcome.chosen_move(), game.legal_moves(Color::White)[0]);
    }
}
