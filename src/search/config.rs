//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Alpha-beta search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Nominal search depth in plies (default: 4).
    /// Capture sequences are extended past it by quiescence search.
    /// A depth of 0 is treated as 1.
    pub depth: u32,

    /// Magnitude of a won/lost position (default: 10_000).
    /// Must exceed any static evaluation. The ply at which the game ends
    /// is subtracted, so quicker wins and slower losses score better.
    pub win_score: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            win_score: 10_000,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom win score.
    pub fn with_win_score(mut self, win_score: i32) -> Self {
        self.win_score = win_score;
        self
    }

    /// Depth actually searched.
    #[must_use]
    pub fn effective_depth(&self) -> u32 {
        self.depth.max(1)
    }
}
