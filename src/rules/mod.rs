//! Rules engine: legal-move enumeration and move application.
//!
//! `RulesEngine` is the seam the search is generic over.
//! `BrazilianRules` implements it:
//! - Mandatory capture with the majority-capture law
//! - Recursive capture chains for men and flying kings
//! - Promotion on the final square of a move
//!
//! The free functions `legal_moves` and `apply` are the plain call
//! surface for callers that do not care about the trait.

pub mod brazilian;
pub mod engine;
pub mod error;
pub mod movegen;

pub use brazilian::BrazilianRules;
pub use engine::{GameResult, RulesEngine};
pub use error::{RulesError, RulesResult};

use crate::core::{Board, Move, Side};

/// Every legal move for `side` under Brazilian rules.
///
/// An empty list means `side` cannot move and has lost.
#[must_use]
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    BrazilianRules.legal_moves(board, side)
}

/// The board after playing `mv`, which must come from
/// `legal_moves(board, _)`.
#[must_use]
pub fn apply(board: &Board, mv: &Move) -> Board {
    BrazilianRules.apply(board, mv)
}
