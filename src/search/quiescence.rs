//! Quiescence search to avoid the horizon effect.
//!
//! Past the nominal depth only captures are explored, so a position is
//! never judged halfway through an exchange. The extension ends on its
//! own once no captures remain: every capture removes a piece.

use crate::core::{Board, Move, Side};
use crate::rules::RulesEngine;

use super::alphabeta::AlphaBetaSearch;

impl<E: RulesEngine> AlphaBetaSearch<E> {
    /// Negamax quiescence search. Scores are from `side`'s point of
    /// view, where `side` is the side to move.
    pub(super) fn quiescence(
        &mut self,
        board: &Board,
        mut alpha: i32,
        beta: i32,
        side: Side,
        ply: u32,
    ) -> i32 {
        self.stats.quiescence_nodes += 1;
        self.stats.observe_ply(ply);

        let stand_pat = self.evaluator.evaluate(board, side);
        if stand_pat >= beta {
            self.stats.cutoffs += 1;
            return beta;
        }
        alpha = alpha.max(stand_pat);

        let captures: Vec<Move> = self
            .engine
            .legal_moves(board, side)
            .into_iter()
            .filter(Move::is_capture)
            .collect();

        for mv in &captures {
            let child = self.engine.apply(board, mv);
            let score = -self.quiescence(&child, -beta, -alpha, side.opponent(), ply + 1);

            alpha = alpha.max(score);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                return beta;
            }
        }

        alpha
    }
}
