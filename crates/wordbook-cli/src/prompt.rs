// Rust guideline compliant 2026-10-19

//! Interactive yes/no confirmation.

use std::io::{self, BufRead, Write};

/// Asks a yes/no question and reads one line of input.
///
/// Only `y` or `yes` (any case) confirm. End of input declines.
///
/// # Errors
///
/// Returns an error if writing the prompt or reading the answer fails.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }

    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Asks on the process terminal, writing the prompt to stderr.
pub fn confirm_stdin(question: &str) -> bool {
    let stdin = io::stdin();
    let mut stderr = io::stderr();
    confirm(&mut stdin.lock(), &mut stderr, question).unwrap_or(false)
}
