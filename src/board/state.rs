use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Grid, MoveRejection, Piece, PieceKind, Square};

/// One committed move. Entries are never changed once appended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece standing on `to` before the move, as it was then
    pub captured: Option<Piece>,
}

/// What a presentation layer shows above the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move is not in check
    ToMove(Color),
    /// The side to move is in check
    InCheck(Color),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::ToMove(color) => write!(f, "{color} to move"),
            GameStatus::InCheck(color) => write!(f, "{color} is in check"),
        }
    }
}

/// Grid, side to move and move history of one game.
///
/// The grid is the only record of piece positions. Each `Board` is an
/// independent value; nothing is shared between instances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: Grid,
    pub(crate) current_turn: Color,
    pub(crate) history: Vec<MoveRecord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard initial arrangement, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in Color::BOTH {
            for (col, &kind) in back_rank.iter().enumerate() {
                board.put(Square(color.back_rank(), col), Piece::new(kind, color));
                board.put(
                    Square(color.pawn_start_row(), col),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    /// A board with no pieces, White to move.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            current_turn: Color::White,
            history: Vec::new(),
        }
    }

    /// Read-only view of the whole grid, indexed `[row][col]`.
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.squares
    }

    #[inline]
    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    /// Committed moves, oldest first.
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// The piece on `square`, if any.
    ///
    /// # Errors
    /// `OutOfRange` if either coordinate is outside 0-7.
    pub fn piece_at(&self, square: Square) -> Result<Option<Piece>, MoveRejection> {
        if !square.is_on_board() {
            return Err(MoveRejection::OutOfRange { square });
        }
        Ok(self.squares[square.row()][square.col()])
    }

    /// Iterate over every occupied square and its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.squares[sq.row()][sq.col()].map(|p| (sq, p)))
    }

    /// Square of the king of `color`, found by scanning the grid.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
    }

    /// Whether any piece of `by` could move onto `target` under its movement rules.
    #[must_use]
    pub fn is_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces()
            .filter(|(_, p)| p.color == by)
            .any(|(sq, p)| p.is_valid_move(sq, &self.squares, target))
    }

    /// Whether the king of `color` is attacked.
    ///
    /// A board without a king of that color is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_attacked(king, color.opponent()),
            None => false,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_in_check(self.current_turn) {
            GameStatus::InCheck(self.current_turn)
        } else {
            GameStatus::ToMove(self.current_turn)
        }
    }

    /// Destinations the piece on `from` may reach, ignoring check.
    ///
    /// Empty when `from` holds no piece.
    ///
    /// # Errors
    /// `OutOfRange` if `from` is off the board.
    pub fn possible_moves(&self, from: Square) -> Result<Vec<Square>, MoveRejection> {
        Ok(self
            .piece_at(from)?
            .map(|piece| piece.possible_moves(from, &self.squares))
            .unwrap_or_default())
    }

    /// Pieces of the opponent captured by `color`, in capture order.
    #[must_use]
    pub fn captured_by(&self, color: Color) -> Vec<Piece> {
        self.history
            .iter()
            .filter_map(|record| record.captured)
            .filter(|piece| piece.color != color)
            .collect()
    }

    /// Material captured by White minus material captured by Black.
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        let total = |color: Color| -> i32 {
            self.captured_by(color)
                .iter()
                .map(|p| p.kind.value() as i32)
                .sum()
        };
        total(Color::White) - total(Color::Black)
    }

    // Raw mutation primitives. No legality checks; only the move executor
    // and the builder call these, and only with on-board squares.

    #[inline]
    pub(crate) fn put(&mut self, square: Square, piece: Piece) {
        self.squares[square.row()][square.col()] = Some(piece);
    }

    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()].take()
    }

    #[inline]
    pub(crate) fn restore(&mut self, square: Square, occupant: Option<Piece>) {
        self.squares[square.row()][square.col()] = occupant;
    }
}
