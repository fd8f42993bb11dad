// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Read};

use crate::{ByteSource, TerminalFd, get_terminal_fd};

/// Reads raw input bytes from the terminal that [`crate::enable_raw_mode`] configures:
/// stdin when it is a terminal, else `/dev/tty`. So keys still arrive in raw mode
/// when stdin is redirected.
///
/// How long a read waits is decided by the terminal settings, see
/// [`crate::RawModeConfig`]: with a timeout configured, a read that times out
/// returns 0 bytes, which this maps to `Ok(None)`.
#[derive(Debug)]
pub struct StdinByteSource {
    terminal: TerminalFd,
}

impl Default for StdinByteSource {
    fn default() -> Self { Self::new() }
}

impl StdinByteSource {
    /// Falls back to plain stdin if there is no terminal at all. Raw mode can't be
    /// enabled in that case either, and reads behave like a pipe.
    #[must_use]
    pub fn new() -> Self {
        let terminal = get_terminal_fd().unwrap_or_else(|error| {
            tracing::debug!(%error, "no terminal, reading from stdin");
            TerminalFd::Stdin(io::stdin())
        });
        Self { terminal }
    }
}

impl ByteSource for StdinByteSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0_u8; 1];
        match self.terminal.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(error)
                if matches!(
                    error.kind(),
                    io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
                ) =>
            {
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }
}
