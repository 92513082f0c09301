//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Full-width nodes visited.
    pub nodes: u64,

    /// Quiescence nodes visited (each one is a static evaluation).
    pub quiescence_nodes: u64,

    /// Beta cutoffs, full-width and quiescence.
    pub cutoffs: u64,

    /// Deepest ply reached, quiescence extension included.
    pub max_ply: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record that `ply` was reached.
    pub fn observe_ply(&mut self, ply: u32) {
        self.max_ply = self.max_ply.max(ply);
    }

    /// All nodes visited.
    #[must_use]
    pub fn total_nodes(&self) -> u64 {
        self.nodes + self.quiescence_nodes
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.total_nodes() as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
