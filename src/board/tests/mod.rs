//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `pieces.rs` - Movement rules for each piece kind on full boards
//! - `check.rs` - Check detection
//! - `make_move.rs` - Move execution, rejection order and rollback
//! - `proptest.rs` - Property-based tests

mod check;

use super::{Board, BoardBuilder, Color, PieceKind, Square};

/// Square from an algebraic name such as `e4`.
pub(super) fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

/// Position from the scenario with a pinned white rook:
/// White King e4 (4,4), White Rook f4 (4,5), Black Rook h4 (4,7).
pub(super) fn pinned_rook() -> Board {
    BoardBuilder::new()
        .piece(Square(4, 4), Color::White, PieceKind::King)
        .piece(Square(4, 5), Color::White, PieceKind::Rook)
        .piece(Square(4, 7), Color::Black, PieceKind::Rook)
        .side_to_move(Color::White)
        .build()
}
