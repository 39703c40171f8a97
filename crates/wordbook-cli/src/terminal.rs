// Rust guideline compliant 2026-10-19

//! Terminal UI utilities for the Wordbook CLI.
//!
//! This module provides color detection and colored status lines on stderr.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Picks the color mode for stderr status lines.
#[must_use]
pub fn color_choice(use_color: bool) -> ColorChoice {
    if use_color && atty::is(atty::Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints a status message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
/// * `use_color` - Whether color is allowed
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let mut stderr = StandardStream::stderr(color_choice(use_color));
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {}", message);
}

/// Prints an error message.
pub fn print_error(message: &str, use_color: bool) {
    print_status("Error:", Color::Red, message, use_color);
}
