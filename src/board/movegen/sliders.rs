use super::super::{Grid, Square};
use super::{delta, occupant};

#[inline]
pub(super) fn is_straight(d_row: isize, d_col: isize) -> bool {
    d_row == 0 || d_col == 0
}

#[inline]
pub(super) fn is_diagonal(d_row: isize, d_col: isize) -> bool {
    d_row.abs() == d_col.abs()
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Callers must already know the two squares share a row, column or diagonal.
pub(super) fn path_clear(from: Square, grid: &Grid, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    let step = (d_row.signum(), d_col.signum());

    let mut current = from;
    loop {
        current = match current.offset(step.0, step.1) {
            Some(next) => next,
            None => return false,
        };
        if current == to {
            return true;
        }
        if occupant(grid, current).is_some() {
            return false;
        }
    }
}
