//! Core value types: sides, cells, squares, boards, moves, RNG.
//!
//! Everything here is a plain value. Boards are `Copy` and never mutated
//! once handed out; the rules engine and search only ever build new ones.

pub mod board;
pub mod moves;
pub mod piece;
pub mod rng;
pub mod square;

pub use board::{Board, BoardError, BoardResult};
pub use moves::{Move, SquareList};
pub use piece::{Cell, Side};
pub use rng::GameRng;
pub use square::{Direction, Square, BOARD_SIZE};
