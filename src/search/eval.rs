//! Static evaluation.
//!
//! `Evaluator` scores a position from one side's point of view.
//! `PositionalEvaluator` is the stock implementation: material, a
//! positional heat table, and a bonus for men still guarding their own
//! back rank. Its weights are plain data so alternative profiles can be
//! swapped in without touching the search.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Side, Square, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

/// Positional bonus per square. Edges are safe, the centre is strong,
/// the double corners are weak.
const DEFAULT_HEAT: [[i32; N]; N] = [
    [0, 4, 0, 4, 0, 4, 0, 4],
    [4, 0, 3, 0, 3, 0, 3, 0],
    [0, 3, 0, 2, 0, 2, 0, 4],
    [4, 0, 5, 0, 5, 0, 3, 0],
    [0, 3, 0, 5, 0, 5, 0, 4],
    [4, 0, 2, 0, 2, 0, 3, 0],
    [0, 3, 0, 3, 0, 3, 0, 4],
    [4, 0, 4, 0, 4, 0, 4, 0],
];

/// Static evaluation trait.
pub trait Evaluator {
    /// Score `board` for `perspective`: positive favours `perspective`.
    fn evaluate(&self, board: &Board, perspective: Side) -> i32;
}

/// Evaluation weights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Value of a man (default: 100).
    pub man: i32,

    /// Value of a king (default: 300, three men).
    pub king: i32,

    /// Bonus for a man on its own side's back rank (default: 20).
    pub back_rank: i32,

    /// Per-square positional bonus, indexed `[row][col]`.
    pub heat: [[i32; N]; N],
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            man: 100,
            king: 300,
            back_rank: 20,
            heat: DEFAULT_HEAT,
        }
    }
}

impl EvalWeights {
    /// Pure material weights: no heat table, no back-rank bonus.
    #[must_use]
    pub fn material_only() -> Self {
        Self {
            back_rank: 0,
            heat: [[0; N]; N],
            ..Self::default()
        }
    }

    /// Set man and king values.
    pub fn with_material(mut self, man: i32, king: i32) -> Self {
        self.man = man;
        self.king = king;
        self
    }

    /// Set the back-rank bonus.
    pub fn with_back_rank(mut self, bonus: i32) -> Self {
        self.back_rank = bonus;
        self
    }
}

/// Material + heat table + back-rank evaluator.
#[derive(Clone, Debug, Default)]
pub struct PositionalEvaluator {
    weights: EvalWeights,
}

impl PositionalEvaluator {
    #[must_use]
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Unsigned worth of `cell` standing on `square`.
    #[must_use]
    pub fn piece_value(&self, cell: Cell, square: Square) -> i32 {
        let Some(owner) = cell.side() else {
            return 0;
        };

        let base = if cell.is_king() {
            self.weights.king
        } else {
            self.weights.man
        };
        let heat = self.weights.heat[square.row as usize][square.col as usize];
        let guard = if cell.is_man() && square.row == owner.home_row() {
            self.weights.back_rank
        } else {
            0
        };

        base + heat + guard
    }
}

impl Evaluator for PositionalEvaluator {
    fn evaluate(&self, board: &Board, perspective: Side) -> i32 {
        board
            .occupied()
            .map(|(square, cell)| {
                let value = self.piece_value(cell, square);
                if cell.belongs_to(perspective) {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}
