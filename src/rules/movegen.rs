//! Per-piece move generation.
//!
//! Capture chains are found by a depth-first walk from the moving piece.
//! The board is only read: pieces jumped earlier in the chain stay where
//! they are and are tracked in an explicit `captured` set, so they still
//! block landings but can never be jumped twice. The moving piece also
//! stays on its start square, so a chain can never pass over or land on it.

use rustc_hash::FxHashSet;

use crate::core::{Board, Direction, Move, Side, Square, SquareList};

/// Append every maximal capture chain available to the piece on `origin`.
///
/// Does nothing if `origin` is empty.
pub fn capture_chains(board: &Board, origin: Square, out: &mut Vec<Move>) {
    let piece = board.get(origin);
    let Some(side) = piece.side() else {
        return;
    };

    let mut walk = ChainWalk {
        board,
        origin,
        side,
        flying: piece.is_king(),
        captured: FxHashSet::default(),
        path: SquareList::new(),
        captures: SquareList::new(),
        out,
    };
    walk.extend(origin);
}

/// Append the non-capturing moves of the piece on `origin`.
///
/// Men step one square forward; kings slide any distance along an empty
/// diagonal in all four directions.
pub fn simple_moves(board: &Board, origin: Square, out: &mut Vec<Move>) {
    let piece = board.get(origin);
    let Some(side) = piece.side() else {
        return;
    };

    for dir in Direction::ALL {
        if piece.is_man() && dir.row_delta() != side.forward() {
            continue;
        }
        for sq in origin.ray(dir) {
            if !board.get(sq).is_empty() {
                break;
            }
            out.push(Move::step(origin, sq));
            if piece.is_man() {
                break;
            }
        }
    }
}

/// State of one capture-chain walk.
struct ChainWalk<'a> {
    board: &'a Board,
    origin: Square,
    side: Side,
    /// Kings see and land at any distance.
    flying: bool,
    /// Enemy pieces already jumped in the current chain.
    captured: FxHashSet<Square>,
    path: SquareList,
    captures: SquareList,
    out: &'a mut Vec<Move>,
}

impl ChainWalk<'_> {
    /// First jumpable enemy along `dir` from `from`, if any.
    fn target(&self, from: Square, dir: Direction) -> Option<Square> {
        for sq in from.ray(dir) {
            let cell = self.board.get(sq);
            if cell.is_empty() {
                if self.flying {
                    continue;
                }
                return None;
            }
            if cell.belongs_to(self.side) || self.captured.contains(&sq) {
                return None;
            }
            return Some(sq);
        }
        None
    }

    /// Try every jump from `from`. Chains that cannot be continued are
    /// emitted. Returns whether at least one jump was available.
    fn extend(&mut self, from: Square) -> bool {
        let mut jumped = false;

        for dir in Direction::ALL {
            let Some(enemy) = self.target(from, dir) else {
                continue;
            };

            for landing in enemy.ray(dir) {
                if !self.board.get(landing).is_empty() {
                    break;
                }
                jumped = true;

                self.captured.insert(enemy);
                self.captures.push(enemy);
                self.path.push(landing);

                if !self.extend(landing) {
                    self.emit();
                }

                self.path.pop();
                self.captures.pop();
                self.captured.remove(&enemy);

                if !self.flying {
                    break;
                }
            }
        }

        jumped
    }

    fn emit(&mut self) {
        if let Some(&end) = self.path.last() {
            self.out.push(Move {
                start: self.origin,
                end,
                path: self.path.clone(),
                captures: self.captures.clone(),
            });
        }
    }
}
