//! Message formatting and warnings shared by the codec and the CLI.
//!
//! Errors are returned, never printed here; warnings go through `tracing` so the
//! binary's subscriber decides where they land.

use std::fmt::Display;

/// Normalize an error message: trimmed, single line.
pub fn error_message(msg: impl Display) -> String {
    msg.to_string()
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Emit a non-fatal warning.
pub fn warn(msg: impl Display) {
    tracing::warn!("{}", error_message(msg));
}
