//! Position analysis helpers for front ends: material totals, game phase
//! and a plain-language reading of an evaluation score.

use std::fmt;

use kibitz_core::{Color, GameState};

use crate::eval::material::{MaterialBalance, material};

/// Coarse game phase, judged by the number of moves played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

impl GamePhase {
    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            GamePhase::Opening => "opening",
            GamePhase::Middlegame => "middlegame",
            GamePhase::Endgame => "endgame",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Material totals of both sides on the current board.
pub fn material_balance(state: &GameState) -> MaterialBalance {
    material(state.board())
}

/// Opening before 20 recorded moves, middlegame before 60, endgame after.
pub fn game_phase(state: &GameState) -> GamePhase {
    match state.move_count() {
        0..20 => GamePhase::Opening,
        20..60 => GamePhase::Middlegame,
        _ => GamePhase::Endgame,
    }
}

/// Describe `score`, taken from `perspective`'s point of view, in words.
///
/// ```
/// use kibitz_core::Color;
/// use kibitz_engine::describe_evaluation;
///
/// assert_eq!(describe_evaluation(0, Color::Black), "Position is equal");
/// assert_eq!(describe_evaluation(250, Color::Black), "Black has a significant advantage");
/// assert_eq!(describe_evaluation(-60, Color::Black), "White has a slight advantage");
/// ```
pub fn describe_evaluation(score: i32, perspective: Color) -> String {
    let leader = match score.signum() {
        0 => return "Position is equal".to_string(),
        1 => perspective,
        _ => perspective.flip(),
    };

    let magnitude = match score.unsigned_abs() {
        1001.. => "winning",
        501.. => "has a decisive advantage",
        201.. => "has a significant advantage",
        101.. => "has a moderate advantage",
        51.. => "has a slight advantage",
        _ => "is slightly better",
    };

    let side = match leader {
        Color::White => "White",
        Color::Black => "Black",
    };
    format!("{side} {magnitude}")
}
