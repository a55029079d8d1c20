use super::super::{Grid, Piece, Square};
use super::{delta, occupant};

/// Pawn geometry: one step forward onto an empty square, two steps forward
/// from an unmoved pawn through an empty square onto an empty square, or one
/// step diagonally forward onto an enemy piece.
///
/// The caller has already excluded own-color destinations.
pub(super) fn pawn_reaches(pawn: Piece, from: Square, grid: &Grid, to: Square) -> bool {
    let dir = pawn.color.pawn_direction();
    let (d_row, d_col) = delta(from, to);
    let target = occupant(grid, to);

    match (d_row, d_col.abs()) {
        (r, 0) if r == dir => target.is_none(),
        (r, 0) if r == 2 * dir => {
            if pawn.has_moved || target.is_some() {
                return false;
            }
            from.offset(dir, 0)
                .is_some_and(|between| occupant(grid, between).is_none())
        }
        (r, 1) if r == dir => target.is_some(),
        _ => false,
    }
}
