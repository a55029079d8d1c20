//! Core chess types.
//!
//! This module contains the value types shared by every part of the referee:
//! - `Color`, `PieceKind` and `Piece` - piece identity and moved flag
//! - `Square` - (row, col) board coordinate with algebraic conversions

mod piece;
mod square;

pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

/// Occupancy of all 64 squares, indexed `[row][col]`.
pub type Grid = [[Option<Piece>; 8]; 8];
