//! Depth-limited minimax with alpha-beta pruning.
//!
//! Every node is scored from the point of view of one fixed root side.
//! Maximizing nodes are the root side's turns, minimizing nodes the
//! opponent's. At the depth limit the search hands over to quiescence
//! search instead of trusting the static evaluation mid-exchange.

use std::time::Instant;

use tracing::debug;

use crate::core::{Board, Move, Side};
use crate::rules::RulesEngine;

use super::config::SearchConfig;
use super::eval::{Evaluator, PositionalEvaluator};
use super::stats::SearchStats;

/// Bound wider than any reachable score.
pub const SCORE_INFINITY: i32 = 1_000_000;

/// Score and chosen move of a completed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Value of the root position for the searching side.
    pub score: i32,

    /// Best move, or `None` if the side has no legal move.
    pub best: Option<Move>,
}

/// Alpha-beta search context.
///
/// Generic over the rules engine type. Owns the configuration, the
/// evaluator, and the statistics of the last search.
pub struct AlphaBetaSearch<E: RulesEngine> {
    /// The game rules engine.
    pub(super) engine: E,

    /// Search configuration.
    config: SearchConfig,

    /// Static evaluator used at quiet leaves.
    pub(super) evaluator: Box<dyn Evaluator>,

    /// Search statistics.
    pub(super) stats: SearchStats,
}

impl<E: RulesEngine> AlphaBetaSearch<E> {
    /// Create a new search context with the default evaluator.
    pub fn new(engine: E, config: SearchConfig) -> Self {
        Self {
            engine,
            config,
            evaluator: Box::new(PositionalEvaluator::default()),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom evaluator.
    pub fn with_evaluator<V: Evaluator + 'static>(mut self, evaluator: V) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Best move for `side` on `board`, or `None` if it cannot move.
    pub fn search(&mut self, board: &Board, side: Side) -> Option<Move> {
        self.search_scored(board, side).best
    }

    /// Run a full search and return the root score with the best move.
    pub fn search_scored(&mut self, board: &Board, side: Side) -> SearchOutcome {
        let start = Instant::now();
        self.stats.reset();

        let depth = self.config.effective_depth();
        let (score, best) =
            self.minimax(board, depth, 0, true, -SCORE_INFINITY, SCORE_INFINITY, side);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            %side,
            depth,
            score,
            nodes = self.stats.nodes,
            quiescence_nodes = self.stats.quiescence_nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            "search complete"
        );

        SearchOutcome { score, best }
    }

    /// Minimax node. Scores are always from `root`'s point of view.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        ply: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        root: Side,
    ) -> (i32, Option<Move>) {
        self.stats.nodes += 1;
        self.stats.observe_ply(ply);

        // Quiescence is negamax: it scores for the side to move, so the
        // opponent's value is negated back with a mirrored window.
        if depth == 0 {
            let score = if maximizing {
                self.quiescence(board, alpha, beta, root, ply)
            } else {
                -self.quiescence(board, -beta, -alpha, root.opponent(), ply)
            };
            return (score, None);
        }

        let to_move = if maximizing { root } else { root.opponent() };
        let moves = self.engine.legal_moves(board, to_move);

        if moves.is_empty() {
            let margin = self.config.win_score - ply as i32;
            return (if maximizing { -margin } else { margin }, None);
        }

        let mut best_move = None;

        if maximizing {
            let mut best = -SCORE_INFINITY;
            for mv in moves {
                let child = self.engine.apply(board, &mv);
                let (score, _) = self.minimax(&child, depth - 1, ply + 1, false, alpha, beta, root);

                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            (best, best_move)
        } else {
            let mut best = SCORE_INFINITY;
            for mv in moves {
                let child = self.engine.apply(board, &mv);
                let (score, _) = self.minimax(&child, depth - 1, ply + 1, true, alpha, beta, root);

                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            (best, best_move)
        }
    }

    /// Rules engine reference.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Square};
    use crate::rules::BrazilianRules;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    fn search(depth: u32) -> AlphaBetaSearch<BrazilianRules> {
        AlphaBetaSearch::new(BrazilianRules, SearchConfig::default().with_depth(depth))
    }

    #[test]
    fn test_search_returns_opening_move() {
        let board = Board::initial();
        let mv = search(1).search(&board, Side::White).unwrap();
        assert!(!mv.is_capture());
        assert_eq!(mv.start.row, 2);
        assert_eq!(mv.end.row, 3);
    }

    #[test]
    fn test_no_moves_returns_none() {
        let board = Board::from_pieces(&[(sq(0, 1), Cell::RedMan), (sq(7, 0), Cell::WhiteMan)]).unwrap();
        let mut s = search(3);
        let outcome = s.search_scored(&board, Side::White);
        assert_eq!(outcome.best, None);
        assert_eq!(outcome.score, -10_000);
    }

    #[test]
    fn test_takes_free_piece() {
        // White can capture (4,3) and nothing can recapture.
        let board = Board::from_pieces(&[
            (sq(3, 2), Cell::WhiteMan),
            (sq(4, 3), Cell::RedMan),
            (sq(7, 0), Cell::RedMan),
        ])
        .unwrap();
        let mv = search(2).search(&board, Side::White).unwrap();
        assert_eq!(mv.captures.as_slice(), &[sq(4, 3)]);
    }

    #[test]
    fn test_prefers_faster_win() {
        // White captures the last red piece immediately: a win at ply 1.
        let board = Board::from_pieces(&[(sq(3, 2), Cell::WhiteMan), (sq(4, 3), Cell::RedMan)]).unwrap();
        let outcome = search(4).search_scored(&board, Side::White);
        assert_eq!(outcome.score, 10_000 - 1);
        assert_eq!(outcome.best.unwrap().end, sq(5, 4));
    }

    #[test]
    fn test_stats_recorded() {
        let mut s = search(3);
        s.search(&Board::initial(), Side::Red);
        let stats = s.stats();
        assert!(stats.nodes > 1);
        assert!(stats.quiescence_nodes > 0);
        assert!(stats.max_ply >= 3);
    }

    #[test]
    fn test_zero_depth_still_moves() {
        let mv = search(0).search(&Board::initial(), Side::White);
        assert!(mv.is_some());
    }

    #[test]
    fn test_board_not_mutated() {
        let board = Board::initial();
        let before = board;
        let _ = search(3).search(&board, Side::White);
        assert_eq!(board, before);
    }
}
