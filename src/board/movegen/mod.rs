//! Per-piece movement rules.
//!
//! Everything here ignores check: a move is valid when the piece's geometry
//! reaches the destination, any squares it slides over are empty, and the
//! destination is empty or holds an enemy piece. King safety is decided by
//! the move executor on the resulting board.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Grid, Piece, PieceKind, Square};

/// Signed (row, col) displacement from `from` to `to`.
#[inline]
fn delta(from: Square, to: Square) -> (isize, isize) {
    (
        to.row() as isize - from.row() as isize,
        to.col() as isize - from.col() as isize,
    )
}

#[inline]
fn occupant(grid: &Grid, sq: Square) -> Option<Piece> {
    grid[sq.row()][sq.col()]
}

impl Piece {
    /// Whether this piece, standing on `from`, may move to `to` on `grid`.
    ///
    /// `grid` is only read. Off-board squares and `from == to` are never
    /// valid; a destination holding a piece of the same color never is either.
    #[must_use]
    pub fn is_valid_move(self, from: Square, grid: &Grid, to: Square) -> bool {
        if !from.is_on_board() || !to.is_on_board() || from == to {
            return false;
        }
        if occupant(grid, to).is_some_and(|target| target.color == self.color) {
            return false;
        }

        let (d_row, d_col) = delta(from, to);
        match self.kind {
            PieceKind::Pawn => pawns::pawn_reaches(self, from, grid, to),
            PieceKind::Knight => knights::knight_reaches(d_row, d_col),
            PieceKind::King => kings::king_reaches(d_row, d_col),
            PieceKind::Rook => {
                sliders::is_straight(d_row, d_col) && sliders::path_clear(from, grid, to)
            }
            PieceKind::Bishop => {
                sliders::is_diagonal(d_row, d_col) && sliders::path_clear(from, grid, to)
            }
            PieceKind::Queen => {
                (sliders::is_straight(d_row, d_col) || sliders::is_diagonal(d_row, d_col))
                    && sliders::path_clear(from, grid, to)
            }
        }
    }

    /// Every square this piece, standing on `from`, may move to.
    ///
    /// Recomputed on each call by testing all 64 squares.
    #[must_use]
    pub fn possible_moves(self, from: Square, grid: &Grid) -> Vec<Square> {
        Square::all()
            .filter(|&to| self.is_valid_move(from, grid, to))
            .collect()
    }
}
