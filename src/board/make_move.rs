use super::{Board, MoveRecord, MoveRejection, Piece, Square};

impl Board {
    /// Validate and play a move for the side on move.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// off-board square, empty source, wrong side, piece geometry, own king
    /// left in check. On success the piece is marked as moved, the move is
    /// appended to the history and the turn passes to the other side.
    ///
    /// # Errors
    /// Any [`MoveRejection`]. The board is identical to its prior state
    /// whenever an error is returned.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<(), MoveRejection> {
        let result = self.try_move(from, to);
        if let Err(rejection) = &result {
            trace!("rejected {from}-{to}: {rejection:?}");
        }
        result
    }

    fn try_move(&mut self, from: Square, to: Square) -> Result<(), MoveRejection> {
        for square in [from, to] {
            if !square.is_on_board() {
                return Err(MoveRejection::OutOfRange { square });
            }
        }

        let piece = self
            .piece_at(from)?
            .ok_or(MoveRejection::NoPieceAtSource { square: from })?;

        if piece.color != self.current_turn {
            return Err(MoveRejection::WrongTurn {
                to_move: self.current_turn,
            });
        }

        if !piece.is_valid_move(from, &self.squares, to) {
            return Err(MoveRejection::IllegalMove { from, to });
        }

        let captured = self.make_trial(from, to);
        if self.is_in_check(self.current_turn) {
            self.unmake_trial(from, to, piece, captured);
            trace!("rolled back {from}-{to}, king left in check");
            return Err(MoveRejection::ExposesOwnKing { from, to });
        }

        self.put(to, piece.moved());
        self.history.push(MoveRecord { from, to, captured });
        self.current_turn = self.current_turn.opponent();
        trace!(
            "played {from}-{to}{}, {} to move",
            if captured.is_some() { " (capture)" } else { "" },
            self.current_turn
        );
        Ok(())
    }

    /// Destinations the piece on `from` may move to without leaving its own
    /// king in check, whichever side is on move.
    ///
    /// Trial moves are made on a scratch copy; `self` is not touched.
    ///
    /// # Errors
    /// `OutOfRange` if `from` is off the board.
    pub fn legal_destinations(&self, from: Square) -> Result<Vec<Square>, MoveRejection> {
        let Some(piece) = self.piece_at(from)? else {
            return Ok(Vec::new());
        };

        let mut scratch = self.clone();
        let legal = piece
            .possible_moves(from, &self.squares)
            .into_iter()
            .filter(|&to| {
                let captured = scratch.make_trial(from, to);
                let safe = !scratch.is_in_check(piece.color);
                scratch.unmake_trial(from, to, piece, captured);
                safe
            })
            .collect();
        Ok(legal)
    }

    /// Move the piece on `from` to `to` with no checks, returning whatever
    /// stood on `to`.
    fn make_trial(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.take(from);
        let captured = self.take(to);
        self.restore(to, moving);
        captured
    }

    /// Exact inverse of [`Board::make_trial`].
    fn unmake_trial(&mut self, from: Square, to: Square, piece: Piece, captured: Option<Piece>) {
        self.restore(to, captured);
        self.put(from, piece);
    }
}
