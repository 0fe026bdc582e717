//! Search configuration: depth, difficulty presets and think time.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Shallowest accepted search depth.
pub const MIN_DEPTH: u32 = 1;

/// Deepest accepted search depth.
pub const MAX_DEPTH: u32 = 10;

/// Depth used by a fresh searcher (the medium preset).
pub const DEFAULT_DEPTH: u8 = 4;

/// Wall-clock budget used by a fresh searcher.
pub const DEFAULT_THINK_TIME: Duration = Duration::from_secs(30);

/// Named difficulty presets, each a fixed search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// All presets, shallowest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Search depth for this preset.
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 8,
        }
    }

    /// Capitalized name.
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// Describe an arbitrary depth: the preset whose band contains it, or
    /// `"Custom"` past the expert band.
    pub const fn label_for_depth(depth: u8) -> &'static str {
        match depth {
            1 | 2 => "Easy",
            3 | 4 => "Medium",
            5 | 6 => "Hard",
            7 | 8 => "Expert",
            _ => "Custom",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    /// Parse a preset name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::InvalidDifficulty { name: s.to_string() })
    }
}

/// Search parameters owned by one [`Searcher`](crate::Searcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the root (1..=10).
    pub depth: u8,
    /// Wall-clock budget before falling back to the first legal move.
    pub think_time: Duration,
}

impl SearchConfig {
    /// Return a copy with `depth`, validated against the accepted range.
    pub fn with_depth(self, depth: u32) -> Result<SearchConfig, ConfigError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
            return Err(ConfigError::InvalidDepth { depth });
        }
        Ok(SearchConfig {
            depth: depth as u8,
            ..self
        })
    }

    /// Return a copy with a non-zero `think_time`.
    pub fn with_think_time(self, think_time: Duration) -> Result<SearchConfig, ConfigError> {
        if think_time.is_zero() {
            return Err(ConfigError::InvalidThinkTime { think_time });
        }
        Ok(SearchConfig { think_time, ..self })
    }

    /// Label of the current depth, see [`Difficulty::label_for_depth`].
    pub fn difficulty_label(&self) -> &'static str {
        Difficulty::label_for_depth(self.depth)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            think_time: DEFAULT_THINK_TIME,
        }
    }
}
