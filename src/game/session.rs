//! A game in progress: board, side to move and move history.
//!
//! `Game` is the surface a front end talks to. It only accepts moves
//! that appear in the current legal list, so stale or hand-built moves
//! are rejected instead of corrupting the board.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Board, Move, Side, Square};
use crate::rules::{BrazilianRules, GameResult, RulesEngine};

/// Errors from playing a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game already has a result.
    #[error("Game is over: {result:?}")]
    GameOver { result: GameResult },

    /// The move is not among the legal moves of the side to move.
    #[error("Illegal move {mv} for {side}")]
    IllegalMove { mv: Move, side: Side },
}

/// Result type alias for game operations.
pub type PlayResult<T> = Result<T, GameError>;

/// Whether the game continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Finished(GameResult),
}

/// One played ply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    pub side: Side,
    pub mv: Move,
}

/// Game session.
#[derive(Clone, Debug)]
pub struct Game {
    rules: BrazilianRules,
    start: Board,
    start_side: Side,
    board: Board,
    to_move: Side,
    history: Vec<PlyRecord>,
    /// Legal moves of `to_move` on `board`.
    legal: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, white to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Board::initial(), Side::White)
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn from_position(board: Board, to_move: Side) -> Self {
        let rules = BrazilianRules::new();
        let legal = rules.legal_moves(&board, to_move);
        Self {
            rules,
            start: board,
            start_side: to_move,
            board,
            to_move,
            history: Vec::new(),
            legal,
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Plies played so far.
    #[must_use]
    pub fn history(&self) -> &[PlyRecord] {
        &self.history
    }

    /// Number of plies played.
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Legal moves of the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal
    }

    /// Legal moves of the piece on `square`.
    ///
    /// Empty when the piece has nothing to do, including when the
    /// majority-capture law forces a different piece to move.
    pub fn moves_from(&self, square: Square) -> impl Iterator<Item = &Move> + '_ {
        self.legal.iter().filter(move |mv| mv.start == square)
    }

    /// Check if the side to move must capture.
    #[must_use]
    pub fn capture_pending(&self) -> bool {
        self.legal.first().is_some_and(Move::is_capture)
    }

    /// Current status. A side with no legal move has lost.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.legal.is_empty() {
            GameStatus::Finished(GameResult::Winner(self.to_move.opponent()))
        } else {
            GameStatus::Ongoing
        }
    }

    /// Play `mv` for the side to move.
    pub fn play(&mut self, mv: &Move) -> PlayResult<()> {
        if let GameStatus::Finished(result) = self.status() {
            return Err(GameError::GameOver { result });
        }
        if !self.legal.contains(mv) {
            return Err(GameError::IllegalMove {
                mv: mv.clone(),
                side: self.to_move,
            });
        }

        self.board = self.rules.apply(&self.board, mv);
        self.history.push(PlyRecord {
            side: self.to_move,
            mv: mv.clone(),
        });
        self.to_move = self.to_move.opponent();
        self.legal = self.rules.legal_moves(&self.board, self.to_move);
        Ok(())
    }

    /// Return to the starting position.
    pub fn reset(&mut self) {
        *self = Self::from_position(self.start, self.start_side);
    }
}
