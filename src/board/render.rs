//! Text rendering of the board.

use std::fmt;

use super::Board;

const FILES: &str = "  a b c d e f g h";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FILES}")?;
        for (row, cells) in self.squares.iter().enumerate() {
            let rank = 8 - row;
            write!(f, "{rank} ")?;
            for cell in cells {
                match cell {
                    Some(piece) => write!(f, "{} ", piece.symbol())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "{rank}")?;
        }
        writeln!(f, "{FILES}")
    }
}
