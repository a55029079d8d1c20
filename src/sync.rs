//! Shared access to one game from several threads.
//!
//! `Board` holds no locks of its own. A host that renders or queries from
//! other threads goes through `SharedBoard`, which holds the lock for the
//! whole of `attempt_move`, so no reader ever sees a half-applied trial move.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Board, Color, MoveRejection, Square};

/// A cloneable handle to a single game guarded by one mutex.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard(Arc<Mutex<Board>>);

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard(Arc::new(Mutex::new(board)))
    }

    /// Play a move under the lock.
    ///
    /// # Errors
    /// The same rejections as [`Board::attempt_move`].
    pub fn attempt_move(&self, from: Square, to: Square) -> Result<(), MoveRejection> {
        self.0.lock().attempt_move(from, to)
    }

    /// Run a read-only query under the lock.
    pub fn with_board<T>(&self, f: impl FnOnce(&Board) -> T) -> T {
        f(&*self.0.lock())
    }

    /// A copy of the board as of now.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.0.lock().clone()
    }

    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.with_board(Board::current_turn)
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.with_board(|board| board.is_in_check(color))
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard::new(board)
    }
}
