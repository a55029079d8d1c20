//! Error types for board operations.

use std::fmt;

use super::{Color, Square};

/// Reason a requested move was refused.
///
/// A rejected move never changes the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    /// No piece on the source square
    NoPieceAtSource { square: Square },
    /// The piece belongs to the player not on move
    WrongTurn { to_move: Color },
    /// The piece cannot reach the destination under its movement rules
    IllegalMove { from: Square, to: Square },
    /// The move would leave the mover's own king in check
    ExposesOwnKing { from: Square, to: Square },
    /// A coordinate lies outside the 8x8 board
    OutOfRange { square: Square },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::NoPieceAtSource { square } => {
                write!(f, "No piece at starting position {square}")
            }
            MoveRejection::WrongTurn { to_move } => write!(f, "It's {to_move}'s turn"),
            MoveRejection::IllegalMove { from, to } => {
                write!(f, "Invalid move for this piece: {from} to {to}")
            }
            MoveRejection::ExposesOwnKing { from, to } => {
                write!(f, "Move {from} to {to} would put your king in check")
            }
            MoveRejection::OutOfRange { square } => {
                write!(f, "Square {square} is off the board")
            }
        }
    }
}

impl std::error::Error for MoveRejection {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Not a file letter a-h followed by a rank digit 1-8
    InvalidNotation { notation: String },
    /// Row or column outside 0-7
    OutOfRange { row: usize, col: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
            SquareError::OutOfRange { row, col } => {
                write!(f, "Square ({row}, {col}) out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}
