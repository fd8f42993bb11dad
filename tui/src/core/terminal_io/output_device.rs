// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter, Result as FmtResult},
          io::{self, Write}};

use crate::{StdoutMock, TerminalIoError};

pub type SendRawTerminal = dyn Write + Send;

/// This struct represents an output device that can be used to write to the terminal.
/// - Use [`OutputDevice::new_stdout`] in apps.
/// - Use [`OutputDevice::new_mock`] in tests, and inspect the returned
///   [`StdoutMock`].
pub struct OutputDevice {
    pub resource: Box<SendRawTerminal>,
    pub is_mock: bool,
}

impl Debug for OutputDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("OutputDevice")
            .field("is_mock", &self.is_mock)
            .finish_non_exhaustive()
    }
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Box::new(io::stdout()),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_mock() -> (Self, StdoutMock) {
        Self::new_from_mock(StdoutMock::default())
    }

    #[must_use]
    pub fn new_from_mock(stdout_mock: StdoutMock) -> (Self, StdoutMock) {
        let this = Self {
            resource: Box::new(stdout_mock.clone()),
            is_mock: true,
        };
        (this, stdout_mock)
    }

    /// Writes every byte of `bytes` and flushes. See [`write_all_and_flush`].
    ///
    /// # Errors
    ///
    /// - [`TerminalIoError::ShortWrite`] if the device stops accepting bytes.
    /// - [`TerminalIoError::Write`] if a write or the flush fails.
    pub fn write_all_and_flush(&mut self, bytes: &[u8]) -> Result<(), TerminalIoError> {
        write_all_and_flush(&mut self.resource, bytes)
    }
}

/// Writes every byte of `bytes` to `writer` and flushes. Interrupted writes are
/// retried. A write that accepts zero bytes is reported as a short write rather than
/// looping forever.
///
/// # Errors
///
/// - [`TerminalIoError::ShortWrite`] if the writer stops accepting bytes.
/// - [`TerminalIoError::Write`] if a write or the flush fails.
pub fn write_all_and_flush<W: Write + ?Sized>(
    writer: &mut W,
    bytes: &[u8],
) -> Result<(), TerminalIoError> {
    let mut written = 0;
    while written < bytes.len() {
        match writer.write(&bytes[written..]) {
            Ok(0) => {
                return Err(TerminalIoError::ShortWrite {
                    expected: bytes.len(),
                    written,
                });
            }
            Ok(count) => written += count,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
            Err(error) => return Err(TerminalIoError::from_write_error(error)),
        }
    }
    writer.flush().map_err(TerminalIoError::from_write_error)
}

impl Write for OutputDevice {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> { self.resource.write(buf) }

    fn flush(&mut self) -> io::Result<()> { self.resource.flush() }
}
