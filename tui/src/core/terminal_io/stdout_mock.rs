// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{self, Write},
          sync::{Arc, Mutex}};

#[derive(Debug, Default)]
struct StdoutMockState {
    buffer: Vec<u8>,
    /// Once this many bytes are buffered, further writes accept 0 bytes.
    capacity_limit: Option<usize>,
}

/// In-memory stand-in for stdout. Clones share one buffer, so a test keeps a clone
/// and inspects what was written through the [`crate::OutputDevice`] that owns the
/// other.
#[derive(Debug, Clone, Default)]
pub struct StdoutMock {
    state: Arc<Mutex<StdoutMockState>>,
}

impl StdoutMock {
    /// A mock that stops accepting bytes after `limit` of them, to exercise short
    /// write handling.
    #[must_use]
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(StdoutMockState {
                buffer: vec![],
                capacity_limit: Some(limit),
            })),
        }
    }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> {
        self.state
            .lock()
            .map(|it| it.buffer.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.get_copy_of_buffer()).into_owned()
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::other("stdout mock lock poisoned"))?;
        let room = state
            .capacity_limit
            .map_or(buf.len(), |limit| limit.saturating_sub(state.buffer.len()));
        let accepted = buf.len().min(room);
        state.buffer.extend_from_slice(&buf[..accepted]);
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

#[cfg(test)]
mod tests_stdout_mock {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let mock = StdoutMock::default();
        let mut writer = mock.clone();
        writer.write_all(b"hello").unwrap();
        assert_eq!(mock.get_copy_of_buffer(), b"hello");
        assert_eq!(mock.get_copy_of_buffer_as_string(), "hello");
    }

    #[test]
    fn capacity_limit_truncates_writes() {
        let mut mock = StdoutMock::with_capacity_limit(3);
        assert_eq!(mock.write(b"ab").unwrap(), 2);
        assert_eq!(mock.write(b"cd").unwrap(), 1);
        assert_eq!(mock.write(b"e").unwrap(), 0);
        assert_eq!(mock.get_copy_of_buffer(), b"abc");
    }
}
