//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (row, col).
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's (rank 1);
/// col 0 is the a-file. The fields are public so that off-board
/// coordinates can be expressed; the board rejects them with
/// `OutOfRange` rather than panicking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Returns true if both coordinates lie in 0..8
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Offset by a signed (row, col) delta, `None` if the result leaves the board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.0.checked_add_signed(d_row)?;
        let col = self.1.checked_add_signed(d_col)?;
        Square::new(row, col)
    }

    /// Iterate over all 64 squares, row by row from row 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square(row, col)))
    }

    /// Parse a two-character algebraic name such as "e2".
    ///
    /// Returns `None` for anything that is not a file letter a-h followed
    /// by a rank digit 1-8. The file letter may be uppercase.
    #[must_use]
    pub fn from_algebraic(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let file = chars.next()?.to_ascii_lowercase();
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return None,
        };
        let row = match rank {
            '1'..='8' => 8 - (rank as usize - '0' as usize),
            _ => return None,
        };
        Some(Square(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(SquareError::OutOfRange { row, col })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| SquareError::InvalidNotation {
            notation: s.to_string(),
        })
    }
}
