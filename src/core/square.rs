//! Board coordinates and diagonal directions.

use serde::{Deserialize, Serialize};

/// Board side length.
pub const BOARD_SIZE: u8 = 8;

/// A square on the 8x8 board, addressed by row and column (both 0-7).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a square.
    ///
    /// Panics if either coordinate is off the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "Square out of bounds");
        Self { row, col }
    }

    /// Create a square, or `None` if the coordinates are off the board.
    #[must_use]
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Dark squares are the only playable ones.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The square `distance` steps away along `dir`, if still on the board.
    #[must_use]
    pub fn offset(self, dir: Direction, distance: u8) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let d = distance as i8;
        Self::try_new(self.row as i8 + dr * d, self.col as i8 + dc * d)
    }

    /// Iterate over the squares along `dir`, nearest first, up to the edge.
    pub fn ray(self, dir: Direction) -> impl Iterator<Item = Square> {
        (1..BOARD_SIZE).map_while(move |d| self.offset(dir, d))
    }

    /// Iterate over every square of the board, row-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    /// Iterate over the 32 dark squares, row-major.
    pub fn dark() -> impl Iterator<Item = Square> {
        Self::all().filter(|sq| sq.is_dark())
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One of the four diagonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Row -1, column -1.
    NorthWest,
    /// Row -1, column +1.
    NorthEast,
    /// Row +1, column -1.
    SouthWest,
    /// Row +1, column +1.
    SouthEast,
}

impl Direction {
    /// All four diagonals in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// (row, column) delta of one step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }

    /// Row component of one step.
    #[must_use]
    pub const fn row_delta(self) -> i8 {
        self.delta().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_squares() {
        assert!(Square::new(0, 1).is_dark());
        assert!(!Square::new(0, 0).is_dark());
        assert_eq!(Square::dark().count(), 32);
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_offset_bounds() {
        let sq = Square::new(0, 1);
        assert_eq!(sq.offset(Direction::SouthEast, 2), Some(Square::new(2, 3)));
        assert_eq!(sq.offset(Direction::NorthEast, 1), None);
        assert_eq!(Square::try_new(-1, 3), None);
        assert_eq!(Square::try_new(7, 8), None);
    }

    #[test]
    fn test_ray() {
        let ray: Vec<_> = Square::new(2, 1).ray(Direction::SouthEast).collect();
        assert_eq!(
            ray,
            vec![
                Square::new(3, 2),
                Square::new(4, 3),
                Square::new(5, 4),
                Square::new(6, 5),
                Square::new(7, 6),
            ]
        );
        assert_eq!(Square::new(0, 7).ray(Direction::NorthEast).count(), 0);
    }

    #[test]
    #[should_panic(expected = "Square out of bounds")]
    fn test_new_out_of_bounds() {
        let _ = Square::new(8, 0);
    }
}
