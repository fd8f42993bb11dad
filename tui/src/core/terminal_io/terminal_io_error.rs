// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

/// Failures talking to the terminal device: attributes, size, and output.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TerminalIoError {
    #[error("no terminal available (stdin is not a tty and /dev/tty can't be opened)")]
    #[diagnostic(
        code(termal_tui::terminal::no_tty),
        help("run the program from an interactive terminal")
    )]
    NoTerminal {
        #[source]
        source: io::Error,
    },

    #[error("failed to {operation} terminal attributes")]
    #[diagnostic(
        code(termal_tui::terminal::attributes),
        help("the terminal may have been closed, or the fd is not a tty")
    )]
    Attributes {
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("saved terminal settings are unavailable, the lock was poisoned")]
    #[diagnostic(code(termal_tui::terminal::settings_lock_poisoned))]
    SettingsLockPoisoned,

    #[error("failed to query the terminal window size")]
    #[diagnostic(
        code(termal_tui::terminal::size),
        help("stdout must be a terminal to query its size")
    )]
    Size {
        #[source]
        source: io::Error,
    },

    #[error("failed to write to the terminal")]
    #[diagnostic(code(termal_tui::terminal::write))]
    Write {
        #[source]
        source: io::Error,
    },

    #[error("short write to the terminal: {written} of {expected} bytes")]
    #[diagnostic(
        code(termal_tui::terminal::short_write),
        help("the output device stopped accepting bytes")
    )]
    ShortWrite { expected: usize, written: usize },

    #[error("terminal control is not supported on this platform")]
    #[diagnostic(code(termal_tui::terminal::unsupported_platform))]
    UnsupportedPlatform,
}

impl TerminalIoError {
    pub(crate) fn from_write_error(source: io::Error) -> Self { Self::Write { source } }
}
