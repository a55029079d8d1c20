//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_referee::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Color, GameStatus, MoveRecord, MoveRejection, Piece, PieceKind, Square,
    SquareError,
};
