// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

/// Failure reading raw input. Malformed or ambiguous sequences are never errors, the
/// decoder degrades them to plain keys instead.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum InputReadError {
    #[error("failed to read a byte of terminal input")]
    #[diagnostic(
        code(termal_tui::input::read_failed),
        help("stdin may be closed or not a terminal, check how the process was started")
    )]
    Read {
        #[source]
        source: io::Error,
    },
}

impl From<io::Error> for InputReadError {
    fn from(source: io::Error) -> Self { Self::Read { source } }
}
