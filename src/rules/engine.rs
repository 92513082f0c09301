//! Rules engine trait.
//!
//! The search is generic over `RulesEngine`, so alternative rule sets
//! (or instrumented wrappers in tests) can be plugged in without
//! touching the search:
//! - What moves are legal
//! - How a move transforms a board

use serde::{Deserialize, Serialize};

use crate::core::{Board, Move, Side};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One side won (the other had no legal move).
    Winner(Side),
    /// Drawn by the ply cap of a match.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return an empty vec if the side cannot move. That is
///   a normal outcome (loss for that side), not an error.
/// - `apply`: Must be pure and deterministic; only called with moves
///   returned by `legal_moves` for the same board.
pub trait RulesEngine {
    /// Enumerate every legal move for `side` on `board`.
    fn legal_moves(&self, board: &Board, side: Side) -> Vec<Move>;

    /// Produce the board that results from playing `mv` on `board`.
    fn apply(&self, board: &Board, mv: &Move) -> Board;

    /// Check if `side` has at least one legal move.
    fn has_moves(&self, board: &Board, side: Side) -> bool {
        !self.legal_moves(board, side).is_empty()
    }
}
