//! Adversarial search for draughts.
//!
//! ## Overview
//!
//! - **Alpha-beta minimax**: fixed-depth search from one root side's
//!   point of view, pruning siblings once `beta <= alpha`.
//! - **Quiescence**: capture-only extension past the depth limit.
//! - **Static evaluation**: swappable `Evaluator`, material + heat table
//!   + back-rank guard by default.
//! - **Deterministic**: move-generation order breaks ties; the same
//!   board, side and config always yield the same move.
//!
//! ## Usage
//!
//! ```rust
//! use damas::core::{Board, Side};
//! use damas::rules::BrazilianRules;
//! use damas::search::{AlphaBetaSearch, SearchConfig};
//!
//! let mut search = AlphaBetaSearch::new(BrazilianRules, SearchConfig::default().with_depth(3));
//! let best = search.search(&Board::initial(), Side::White);
//! assert!(best.is_some());
//! println!("visited {} nodes", search.stats().total_nodes());
//! ```

pub mod alphabeta;
pub mod config;
pub mod eval;
pub mod quiescence;
pub mod stats;

pub use alphabeta::{AlphaBetaSearch, SearchOutcome, SCORE_INFINITY};
pub use config::SearchConfig;
pub use eval::{EvalWeights, Evaluator, PositionalEvaluator};
pub use stats::SearchStats;

use crate::core::{Board, Move, Side};
use crate::rules::BrazilianRules;

/// Best move for `side` searching `depth` plies with default settings.
///
/// Returns `None` exactly when `side` has no legal move.
#[must_use]
pub fn best_move(board: &Board, side: Side, depth: u32) -> Option<Move> {
    AlphaBetaSearch::new(BrazilianRules, SearchConfig::default().with_depth(depth)).search(board, side)
}
