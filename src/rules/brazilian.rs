//! Brazilian draughts on the 8x8 board.
//!
//! - Capturing is mandatory, and only the longest chains on the board are
//!   legal (majority-capture law), whichever pieces they belong to.
//! - Men step forward one square but capture in all four directions.
//! - Kings fly: they slide and capture along whole diagonals.
//! - A man ending its move on the far row is promoted; passing over that
//!   row mid-chain does not promote.

use crate::core::{Board, Cell, Move, Side};

use super::engine::RulesEngine;
use super::error::{RulesError, RulesResult};
use super::movegen::{capture_chains, simple_moves};

/// The Brazilian rule set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrazilianRules;

impl BrazilianRules {
    /// Create the rule set.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Apply `mv` after checking that it fits `board`.
    ///
    /// Catches stale or foreign moves (wrong start piece, occupied
    /// destination, captures that are not enemy pieces). It does not
    /// re-run move generation, so a well-formed but illegal move still
    /// passes; use `legal_moves` to check legality.
    pub fn try_apply(&self, board: &Board, mv: &Move) -> RulesResult<Board> {
        check_fits(board, mv)?;
        Ok(place(board, mv))
    }
}

impl RulesEngine for BrazilianRules {
    fn legal_moves(&self, board: &Board, side: Side) -> Vec<Move> {
        let mut moves = Vec::new();

        for (square, _) in board.pieces(side) {
            capture_chains(board, square, &mut moves);
        }

        if let Some(longest) = moves.iter().map(Move::capture_count).max() {
            moves.retain(|mv| mv.capture_count() == longest);
            return moves;
        }

        for (square, _) in board.pieces(side) {
            simple_moves(board, square, &mut moves);
        }
        moves
    }

    /// Panics if `mv` does not fit `board`. The check is a handful of
    /// square reads, so it stays on in release builds.
    fn apply(&self, board: &Board, mv: &Move) -> Board {
        if let Err(err) = check_fits(board, mv) {
            panic!("Move {mv} was not generated for this board: {err}");
        }
        place(board, mv)
    }
}

/// Verify the structural precondition of `apply`.
fn check_fits(board: &Board, mv: &Move) -> RulesResult<()> {
    if !mv.is_well_formed() {
        return Err(RulesError::MalformedMove);
    }

    let side = board
        .get(mv.start)
        .side()
        .ok_or(RulesError::NoPieceAtStart { square: mv.start })?;

    if !board.get(mv.end).is_empty() {
        return Err(RulesError::DestinationOccupied { square: mv.end });
    }

    for &square in &mv.captures {
        if !board.get(square).belongs_to(side.opponent()) {
            return Err(RulesError::NotAnEnemy { square });
        }
    }
    Ok(())
}

/// Build the successor board.
fn place(board: &Board, mv: &Move) -> Board {
    let piece = board.get(mv.start);
    let mut next = *board;

    next.set(mv.start, Cell::Empty);
    for &square in &mv.captures {
        next.set(square, Cell::Empty);
    }

    let promotes = piece
        .side()
        .is_some_and(|side| piece.is_man() && mv.end.row == side.promotion_row());
    next.set(mv.end, if promotes { piece.promoted() } else { piece });

    next
}
