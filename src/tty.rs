//! Terminal I/O utilities for CLI.
//!
//! Provides TTY detection and user prompting.

use std::io::{self, BufRead, IsTerminal, Write};

pub fn is_stdin_tty() -> bool {
    io::stdin().is_terminal()
}

/// Read one line from stdin, without its line terminator.
///
/// Returns `None` at end of input.
pub fn read_line() -> scaffold_kit::Result<Option<String>> {
    let stdin = io::stdin();
    let mut line = String::new();
    let read = stdin.lock().read_line(&mut line).map_err(|e| {
        scaffold_kit::Error::internal_io(e.to_string(), Some("read stdin".to_string()))
    })?;

    if read == 0 {
        return Ok(None);
    }

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

pub fn prompt(message: &str) -> scaffold_kit::Result<Option<String>> {
    eprint!("{}", message);
    io::stderr().flush().ok();

    read_line()
}

/// Print status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", message);
    }
}

// log_status! macro is defined in lib.rs (#[macro_export]) and available crate-wide.
