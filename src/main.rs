use std::io;

use chess_referee::{cli, Board};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::run(&mut Board::new(), stdin.lock(), stdout.lock())
}
