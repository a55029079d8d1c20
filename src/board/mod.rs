//! Chess board representation and move refereeing.
//!
//! Uses an 8x8 mailbox grid. Decides whether a requested move is legal
//! under piece geometry, occupancy and king safety, plays it, and tracks
//! the side to move and the move history. Castling, en passant and
//! promotion are not supported.
//!
//! # Example
//! ```
//! use chess_referee::board::{Board, Color, Square};
//!
//! let mut board = Board::new();
//! board.attempt_move(Square(6, 4), Square(4, 4)).unwrap(); // e2-e4
//! assert_eq!(board.current_turn(), Color::Black);
//! ```

mod builder;
mod error;
mod make_move;
mod movegen;
pub mod prelude;
mod render;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveRejection, SquareError};
pub use state::{Board, GameStatus, MoveRecord};
pub use types::{Color, Grid, Piece, PieceKind, Square};
