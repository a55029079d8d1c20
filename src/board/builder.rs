//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece, for tests and for hosts that
//! want to start from something other than the initial arrangement.
//!
//! # Example
//! ```
//! use chess_referee::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(4, 4), Color::White, PieceKind::King)
//!     .piece(Square(4, 5), Color::White, PieceKind::Rook)
//!     .piece(Square(4, 7), Color::Black, PieceKind::Rook)
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(!board.is_in_check(Color::White));
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
///
/// Squares off the board are ignored.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder, White to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().pieces().collect(),
            side_to_move: Color::White,
        }
    }

    /// Place an unmoved piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(square, Piece::new(kind, color))
    }

    /// Place a piece that counts as having moved (a pawn placed this way
    /// has no double step).
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(square, Piece::new(kind, color).moved())
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board with an empty history.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.put(square, piece);
        }
        board.current_turn = self.side_to_move;
        board
    }

    fn place(mut self, square: Square, piece: Piece) -> Self {
        if square.is_on_board() {
            self = self.clear(square);
            self.pieces.push((square, piece));
        }
        self
    }
}
