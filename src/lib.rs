/// Debug-level log line, compiled in only with the `logging` feature.
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::debug!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)*);
    }};
}

pub mod board;
pub mod cli;
pub mod sync;

pub use board::{Board, Color, MoveRejection, Piece, PieceKind, Square};
pub use sync::SharedBoard;
