/// One step in any direction. Castling is not supported.
#[inline]
pub(super) fn king_reaches(d_row: isize, d_col: isize) -> bool {
    d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0)
}
