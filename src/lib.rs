//! # damas
//!
//! Brazilian draughts (8x8, mandatory capture, majority-capture law,
//! flying kings) with an alpha-beta search engine.
//!
//! ## Design Principles
//!
//! 1. **Immutable boards**: `Board` is a `Copy` value. Applying a move
//!    returns a new board, so search nodes never share mutable state.
//!
//! 2. **Typed moves**: a `Move` is a fixed-shape record (start, end,
//!    path, captures), never a loose map.
//!
//! 3. **Pluggable seams**: the search is generic over `RulesEngine` and
//!    takes its static evaluation from a swappable `Evaluator`.
//!
//! ## Modules
//!
//! - `core`: Sides, cells, squares, boards, moves, RNG
//! - `rules`: RulesEngine trait and the Brazilian rule set
//! - `search`: Alpha-beta minimax, quiescence, evaluation
//! - `game`: Game sessions, players, full matches
//!
//! ## Example
//!
//! ```
//! use damas::{apply, best_move, legal_moves, Board, Side};
//!
//! let board = Board::initial();
//! assert_eq!(legal_moves(&board, Side::White).len(), 7);
//!
//! let mv = best_move(&board, Side::White, 3).unwrap();
//! let next = apply(&board, &mv);
//! assert_eq!(next.count(Side::White), 12);
//! ```

pub mod core;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, Cell, Direction, GameRng, Move, Side, Square,
};

pub use crate::rules::{apply, legal_moves, BrazilianRules, GameResult, RulesEngine, RulesError};

pub use crate::search::{
    best_move, AlphaBetaSearch, EvalWeights, Evaluator, PositionalEvaluator, SearchConfig,
    SearchOutcome, SearchStats,
};

pub use crate::game::{
    play_match, Game, GameError, GameStatus, MatchConfig, MatchRecord, Player, RandomPlayer,
    SearchPlayer,
};
