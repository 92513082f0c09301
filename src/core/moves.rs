//! Move representation.
//!
//! A move is one ply for one piece: where it starts, where it ends, the
//! landing squares visited along a capture chain, and the enemy pieces
//! the chain removes. Simple moves carry a single-entry path (the
//! destination) and no captures.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::square::Square;

/// Inline capacity for paths and capture lists.
/// Chains longer than this spill to the heap.
const INLINE_CHAIN: usize = 4;

/// Ordered list of squares, stored inline for short chains.
pub type SquareList = SmallVec<[Square; INLINE_CHAIN]>;

/// A single legal ply.
///
/// ## Invariant
///
/// For a capture, `path.len() == captures.len()` and `end` is the last
/// entry of `path`.
///
/// ## Example
///
/// ```
/// use damas::core::{Move, Square};
///
/// let step = Move::step(Square::new(2, 1), Square::new(3, 2));
/// assert!(!step.is_capture());
/// assert_eq!(step.path.as_slice(), &[Square::new(3, 2)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Square the piece leaves.
    pub start: Square,

    /// Square the piece comes to rest on.
    pub end: Square,

    /// Landing squares in order. For a simple move, just `end`.
    pub path: SquareList,

    /// Squares of the enemy pieces removed, in jump order.
    pub captures: SquareList,
}

impl Move {
    /// A non-capturing move.
    #[must_use]
    pub fn step(start: Square, end: Square) -> Self {
        let mut path = SquareList::new();
        path.push(end);
        Self {
            start,
            end,
            path,
            captures: SquareList::new(),
        }
    }

    /// A capture chain from its landing squares and captured squares.
    ///
    /// Panics if the chain is empty or the two lists differ in length.
    #[must_use]
    pub fn capture(start: Square, path: &[Square], captures: &[Square]) -> Self {
        assert!(!captures.is_empty(), "Capture chain must capture at least one piece");
        assert_eq!(path.len(), captures.len(), "One landing square per jump");
        Self {
            start,
            end: path[path.len() - 1],
            path: SquareList::from_slice(path),
            captures: SquareList::from_slice(captures),
        }
    }

    /// Check if this move captures anything.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// Number of pieces captured.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.captures.len()
    }

    /// Check the path/captures shape invariant.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        if self.is_capture() {
            self.path.len() == self.captures.len() && self.path.last() == Some(&self.end)
        } else {
            self.path.as_slice() == [self.end]
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_capture() { "x" } else { "-" };
        write!(f, "{}", self.start)?;
        for sq in &self.path {
            write!(f, "{}{}", sep, sq)?;
        }
        Ok(())
    }
}
