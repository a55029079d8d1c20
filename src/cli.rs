//! Line-oriented interactive play.
//!
//! Each turn prints the board and whose move it is, then reads one line:
//! `quit`, or two squares in algebraic notation such as `e2 e4`.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{Board, Color, GameStatus, Square};

/// A parsed line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Move { from: Square, to: Square },
}

/// Why a line of input could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Not exactly two tokens
    WrongTokenCount { found: usize },
    /// A token is not a square name
    InvalidSquare { token: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount { .. } => write!(f, "Invalid input. Use format: e2 e4"),
            InputError::InvalidSquare { .. } => {
                write!(f, "Invalid position. Use format like e2, a1, h8")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse one input line. Surrounding whitespace and letter case are ignored.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim().to_lowercase();
    if line == "quit" {
        return Ok(Command::Quit);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let [from, to] = parts[..] else {
        return Err(InputError::WrongTokenCount { found: parts.len() });
    };

    let square = |token: &str| {
        Square::from_algebraic(token).ok_or_else(|| InputError::InvalidSquare {
            token: token.to_string(),
        })
    };
    Ok(Command::Move {
        from: square(from)?,
        to: square(to)?,
    })
}

/// Side name in capitals, as the prompt shows it.
fn shout(color: Color) -> String {
    color.to_string().to_uppercase()
}

/// Play on `board` until `quit` or end of input.
///
/// # Errors
/// Only I/O errors from `input` or `output`.
pub fn run<R: BufRead, W: Write>(board: &mut Board, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "=== Chess Game ===")?;
    writeln!(output, "Enter moves in format: e2 e4 (from to)")?;
    writeln!(output, "Type 'quit' to exit")?;
    writeln!(output)?;

    let mut lines = input.lines();
    loop {
        writeln!(output, "{board}")?;
        if let GameStatus::InCheck(color) = board.status() {
            writeln!(output, "{} is in CHECK!", shout(color))?;
        }
        writeln!(output, "{}'s turn", shout(board.current_turn()))?;
        write!(output, "Enter move: ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Ok(());
        };

        match parse_command(&line) {
            Ok(Command::Quit) => {
                writeln!(output, "Thanks for playing!")?;
                return Ok(());
            }
            Ok(Command::Move { from, to }) => match board.attempt_move(from, to) {
                Ok(()) => writeln!(output, "✓ Move successful")?,
                Err(rejection) => writeln!(output, "✗ {rejection}")?,
            },
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}
