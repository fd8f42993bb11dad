// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Size, TerminalIoError, height, width};

/// Get the terminal size (columns and rows) of stdout.
///
/// # Errors
///
/// Returns [`TerminalIoError::Size`] if stdout is not a terminal.
pub fn get_size() -> Result<Size, TerminalIoError> {
    let winsize = rustix::termios::tcgetwinsize(std::io::stdout())
        .map_err(|errno| TerminalIoError::Size {
            source: errno.into(),
        })?;
    let size = width(usize::from(winsize.ws_col)) + height(usize::from(winsize.ws_row));
    tracing::debug!(%size, "terminal size");
    Ok(size)
}
