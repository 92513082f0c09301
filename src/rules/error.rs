//! Error types for the rules engine.
//!
//! These only describe contract violations: applying a move that was not
//! generated for the board at hand. Running out of moves is not an error.

use thiserror::Error;

use crate::core::Square;

/// A move does not fit the board it is being applied to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Path and capture list do not describe a valid chain.
    #[error("Malformed move: path and captures do not match")]
    MalformedMove,

    /// Nothing stands on the start square.
    #[error("No piece at start square {square}")]
    NoPieceAtStart { square: Square },

    /// The destination is occupied by another piece.
    #[error("Destination square {square} is occupied")]
    DestinationOccupied { square: Square },

    /// A listed capture is empty or holds a friendly piece.
    #[error("Square {square} does not hold an enemy piece to capture")]
    NotAnEnemy { square: Square },
}

/// Result type alias for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
