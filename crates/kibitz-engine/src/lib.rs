//! Evaluation and search for kibitz.

pub mod analysis;
pub mod config;
pub mod error;
pub mod eval;
pub mod search;

pub use analysis::{GamePhase, describe_evaluation, game_phase, material_balance};
pub use config::{DEFAULT_DEPTH, DEFAULT_THINK_TIME, Difficulty, MAX_DEPTH, MIN_DEPTH, SearchConfig};
pub use error::{ConfigError, SearchError};
pub use eval::material::MaterialBalance;
pub use eval::{WIN_SCORE, evaluate};
pub use search::control::SearchControl;
pub use search::{INF, SearchOutcome, SearchResult, Searcher};
