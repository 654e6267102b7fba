//! Terminal helpers: hidden input and state restoration.

mod input;

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

pub use input::{SecretInput, read_secret};

/// Flush stderr, where prompts are drawn.
pub fn flush() {
    let _ = io::stderr().flush();
}

/// Leave raw mode and reset colors.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    eprint!("\x1b[0m");
    flush();
}
