//! Terminal detection utilities.
//!
//! TTY status, terminal dimensions, and color support.

use std::env;

/// Returns `true` if stdout is connected to a terminal (TTY).
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Returns the terminal width in columns, defaulting to 80 if detection fails.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _rows)| cols as usize)
        .unwrap_or(80)
}

/// Determines if ANSI color codes should be used.
///
/// Respects standard conventions:
/// - `NO_COLOR` (any value): disables color (<https://no-color.org/>)
/// - `CLICOLOR=0`: disables color
/// - `TERM=dumb`: disables color
/// - `CLICOLOR_FORCE` (any value): forces color even in non-TTY
/// - Falls back to TTY detection
pub fn supports_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if env::var("CLICOLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("TERM").as_deref() == Ok("dumb") {
        return false;
    }

    if env::var_os("CLICOLOR_FORCE").is_some() {
        return true;
    }

    is_tty()
}
