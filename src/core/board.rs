//! Immutable 8x8 board value.
//!
//! A `Board` is a plain `Copy` value: every change produces a new board,
//! so positions can be handed down a search tree without any sharing.
//!
//! ## Text form
//!
//! Eight lines, row 0 first. Each line holds eight cell symbols
//! (`.` empty, `w`/`W` white man/king, `r`/`R` red man/king); whitespace
//! between symbols is ignored.
//!
//! ```
//! use damas::core::{Board, Cell, Side, Square};
//!
//! let board: Board = "
//!     . . . . . . . .
//!     . . . . . . . .
//!     . . . . . . . .
//!     . . w . . . . .
//!     . . . r . . . .
//!     . . . . . . . .
//!     . . . . . . . .
//!     . . . . . . . .
//! ".parse().unwrap();
//!
//! assert_eq!(board.get(Square::new(3, 2)), Cell::WhiteMan);
//! assert_eq!(board.count(Side::Red), 1);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::piece::{Cell, Side};
use super::square::{Square, BOARD_SIZE};

/// Errors building or parsing a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Pieces may only stand on dark squares.
    #[error("Square {square} is a light square and cannot hold a piece")]
    LightSquare { square: Square },

    /// Text form did not have eight rows.
    #[error("Expected 8 rows, found {found}")]
    RowCount { found: usize },

    /// A row of the text form did not have eight cells.
    #[error("Row {row}: expected 8 cells, found {found}")]
    ColumnCount { row: usize, found: usize },

    /// Unrecognized cell symbol.
    #[error("Row {row}: unknown cell symbol '{symbol}'")]
    UnknownSymbol { row: usize, symbol: char },
}

/// Result type alias for board construction.
pub type BoardResult<T> = Result<T, BoardError>;

/// An 8x8 draughts board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard starting position: white men on the dark squares of
    /// rows 0-2, red men on the dark squares of rows 5-7.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for sq in Square::dark() {
            if sq.row < 3 {
                board.set(sq, Cell::WhiteMan);
            } else if sq.row > 4 {
                board.set(sq, Cell::RedMan);
            }
        }
        board
    }

    /// Contents of a square.
    #[must_use]
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.row as usize][square.col as usize]
    }

    /// A new board with `cell` placed on `square`.
    ///
    /// Fails if a piece would be placed on a light square.
    pub fn with(mut self, square: Square, cell: Cell) -> BoardResult<Self> {
        if !cell.is_empty() && !square.is_dark() {
            return Err(BoardError::LightSquare { square });
        }
        self.set(square, cell);
        Ok(self)
    }

    /// Build a board from a list of placements.
    pub fn from_pieces(pieces: &[(Square, Cell)]) -> BoardResult<Self> {
        pieces
            .iter()
            .try_fold(Self::empty(), |board, &(sq, cell)| board.with(sq, cell))
    }

    /// Occupied squares of `side`, row-major, with their contents.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::dark()
            .map(move |sq| (sq, self.get(sq)))
            .filter(move |(_, cell)| cell.belongs_to(side))
    }

    /// Every occupied square, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::all()
            .map(move |sq| (sq, self.get(sq)))
            .filter(|(_, cell)| !cell.is_empty())
    }

    /// Number of pieces belonging to `side`.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.occupied().count()
    }

    /// Check the occupancy invariant: no piece on a light square.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.occupied().all(|(sq, _)| sq.is_dark())
    }

    /// In-place write, only used while a fresh board is being built.
    pub(crate) fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.row as usize][square.col as usize] = cell;
    }
}

impl std::str::FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardError::RowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE as usize {
                return Err(BoardError::ColumnCount {
                    row,
                    found: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                let cell =
                    Cell::from_symbol(symbol).ok_or(BoardError::UnknownSymbol { row, symbol })?;
                board = board.with(Square::new(row as u8, col as u8), cell)?;
            }
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
