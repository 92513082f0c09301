//! Sides and cell contents.
//!
//! ## Side
//!
//! White starts on rows 0-2 and advances toward row 7. Red starts on
//! rows 5-7 and advances toward row 0. White moves first.
//!
//! ## Cell
//!
//! A cell encodes both the owning side and the rank (man or king) of
//! the piece standing on it, or nothing at all.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Red,
}

impl Side {
    /// Both sides, in turn order.
    pub const ALL: [Side; 2] = [Side::White, Side::Red];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::White => Side::Red,
            Side::Red => Side::White,
        }
    }

    /// Row delta of a forward step for this side's men.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Red => -1,
        }
    }

    /// Row on which this side's men are promoted.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Red => 0,
        }
    }

    /// This side's own back rank.
    #[must_use]
    pub const fn home_row(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Red => 7,
        }
    }

    /// The man of this side.
    #[must_use]
    pub const fn man(self) -> Cell {
        match self {
            Side::White => Cell::WhiteMan,
            Side::Red => Cell::RedMan,
        }
    }

    /// The king of this side.
    #[must_use]
    pub const fn king(self) -> Cell {
        match self {
            Side::White => Cell::WhiteKing,
            Side::Red => Cell::RedKing,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Red => write!(f, "Red"),
        }
    }
}

/// Contents of a single board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    WhiteMan,
    WhiteKing,
    RedMan,
    RedKing,
}

impl Cell {
    /// Owning side, or `None` for an empty cell.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::WhiteMan | Cell::WhiteKing => Some(Side::White),
            Cell::RedMan | Cell::RedKing => Some(Side::Red),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Cell::WhiteKing | Cell::RedKing)
    }

    #[must_use]
    pub const fn is_man(self) -> bool {
        matches!(self, Cell::WhiteMan | Cell::RedMan)
    }

    /// Check if this cell holds a piece of `side`.
    #[must_use]
    pub fn belongs_to(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// The king of the same side. Kings and empty cells are unchanged.
    #[must_use]
    pub const fn promoted(self) -> Self {
        match self {
            Cell::WhiteMan => Cell::WhiteKing,
            Cell::RedMan => Cell::RedKing,
            other => other,
        }
    }

    /// Single-character text form used by the board notation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::WhiteMan => 'w',
            Cell::WhiteKing => 'W',
            Cell::RedMan => 'r',
            Cell::RedKing => 'R',
        }
    }

    /// Inverse of [`Cell::symbol`].
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            'w' => Some(Cell::WhiteMan),
            'W' => Some(Cell::WhiteKing),
            'r' => Some(Cell::RedMan),
            'R' => Some(Cell::RedKing),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::White.opponent(), Side::Red);
        assert_eq!(Side::Red.opponent(), Side::White);
        assert_eq!(Side::White.forward(), 1);
        assert_eq!(Side::Red.forward(), -1);
        assert_eq!(Side::White.promotion_row(), 7);
        assert_eq!(Side::Red.promotion_row(), 0);
        assert_eq!(Side::White.home_row(), 0);
        assert_eq!(Side::Red.home_row(), 7);
        assert_eq!(format!("{}", Side::Red), "Red");
    }

    #[test]
    fn test_cell_ownership() {
        assert_eq!(Cell::Empty.side(), None);
        assert_eq!(Cell::WhiteKing.side(), Some(Side::White));
        assert!(Cell::RedMan.belongs_to(Side::Red));
        assert!(!Cell::RedMan.belongs_to(Side::White));
        assert!(Cell::RedKing.is_king());
        assert!(Cell::WhiteMan.is_man());
        assert!(!Cell::Empty.is_man());
    }

    #[test]
    fn test_promotion() {
        assert_eq!(Cell::WhiteMan.promoted(), Cell::WhiteKing);
        assert_eq!(Cell::RedMan.promoted(), Cell::RedKing);
        assert_eq!(Cell::RedKing.promoted(), Cell::RedKing);
        assert_eq!(Cell::Empty.promoted(), Cell::Empty);
    }

    #[test]
    fn test_symbols() {
        for cell in [Cell::Empty, Cell::WhiteMan, Cell::WhiteKing, Cell::RedMan, Cell::RedKing] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        assert_eq!(Cell::from_symbol('x'), None);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Cell::RedKing).unwrap();
        let cell: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, Cell::RedKing);
    }
}
