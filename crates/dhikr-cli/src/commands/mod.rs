pub mod adhkar;
pub mod campaign;
pub mod config;
pub mod items;
pub mod session;
pub mod tasbih;

use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stderr and read the answer from stdin.
/// Anything but `y`/`yes` counts as no, including end of input.
pub fn ask_yes_no(prompt: &str) -> io::Result<bool> {
    eprint!("{prompt} [y/N] ");
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "نعم")
}
