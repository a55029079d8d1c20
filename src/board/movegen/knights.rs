/// Knight jumps: (2, 1) or (1, 2) in any direction. Nothing blocks a jump.
#[inline]
pub(super) fn knight_reaches(d_row: isize, d_col: isize) -> bool {
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}
