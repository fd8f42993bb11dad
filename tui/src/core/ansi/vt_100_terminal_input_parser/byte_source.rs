// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque, io};

/// Where the decoder pulls raw input bytes from, one at a time.
///
/// Implementations block for at most their configured timeout. For the terminal that
/// timeout is set by raw mode (see [`crate::RawModeConfig`]), and the implementation is
/// [`crate::StdinByteSource`]. Tests use [`MockByteSource`].
pub trait ByteSource {
    /// Returns `Ok(None)` when no byte arrived before the timeout.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the read fails.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn read_byte(&mut self) -> io::Result<Option<u8>> { (**self).read_byte() }
}

impl<T: ByteSource + ?Sized> ByteSource for Box<T> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> { (**self).read_byte() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptedRead {
    Byte(u8),
    Timeout,
    Error(io::ErrorKind),
}

/// A scripted [`ByteSource`]: plays back bytes, timeouts, and errors in order. Once
/// the script runs out every read times out.
///
/// ```
/// use termal_tui::{ByteSource, MockByteSource};
///
/// let mut source = MockByteSource::new(b"\x1b").then_timeout().then_bytes(b"[A");
/// assert_eq!(source.read_byte().unwrap(), Some(0x1b));
/// assert_eq!(source.read_byte().unwrap(), None);
/// assert_eq!(source.read_byte().unwrap(), Some(b'['));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockByteSource {
    script: VecDeque<ScriptedRead>,
    reads: usize,
}

impl MockByteSource {
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self { Self::default().then_bytes(bytes) }

    #[must_use]
    pub fn then_bytes(mut self, bytes: &[u8]) -> Self {
        self.push_bytes(bytes);
        self
    }

    #[must_use]
    pub fn then_timeout(mut self) -> Self {
        self.script.push_back(ScriptedRead::Timeout);
        self
    }

    #[must_use]
    pub fn then_error(mut self, kind: io::ErrorKind) -> Self {
        self.script.push_back(ScriptedRead::Error(kind));
        self
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.script
            .extend(bytes.iter().copied().map(ScriptedRead::Byte));
    }

    /// Bytes left in the script (timeouts and errors are not counted).
    #[must_use]
    pub fn remaining_bytes(&self) -> usize {
        self.script
            .iter()
            .filter(|it| matches!(it, ScriptedRead::Byte(_)))
            .count()
    }

    /// How many times [`ByteSource::read_byte`] was called.
    #[must_use]
    pub fn read_count(&self) -> usize { self.reads }
}

impl ByteSource for MockByteSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        self.reads += 1;
        match self.script.pop_front() {
            Some(ScriptedRead::Byte(byte)) => Ok(Some(byte)),
            Some(ScriptedRead::Timeout) | None => Ok(None),
            Some(ScriptedRead::Error(kind)) => Err(io::Error::from(kind)),
        }
    }
}

#[cfg(test)]
mod tests_byte_source {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mock_plays_script_in_order() {
        let mut source = MockByteSource::new(b"ab")
            .then_timeout()
            .then_error(io::ErrorKind::BrokenPipe)
            .then_bytes(b"c");
        assert_eq!(source.remaining_bytes(), 3);

        assert_eq!(source.read_byte().unwrap(), Some(b'a'));
        assert_eq!(source.read_byte().unwrap(), Some(b'b'));
        assert_eq!(source.read_byte().unwrap(), None);
        assert_eq!(
            source.read_byte().unwrap_err().kind(),
            io::ErrorKind::BrokenPipe
        );
        assert_eq!(source.read_byte().unwrap(), Some(b'c'));
        assert_eq!(source.read_byte().unwrap(), None);
        assert_eq!(source.read_count(), 6);
    }

    #[test]
    fn works_through_mut_ref_and_box() {
        fn read_one(mut source: impl ByteSource) -> Option<u8> {
            source.read_byte().unwrap()
        }

        let mut source = MockByteSource::new(b"xy");
        assert_eq!(read_one(&mut source), Some(b'x'));
        let mut boxed: Box<dyn ByteSource> = Box::new(source);
        assert_eq!(boxed.read_byte().unwrap(), Some(b'y'));
    }
}
