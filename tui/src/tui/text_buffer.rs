// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{self, Write};

/// Staging area for text that is laid onto a [`crate::View`].
///
/// Holds code points (not bytes) up to a fixed capacity that is allocated once. An
/// append that doesn't fit is rejected as a whole: nothing is written and `0` is
/// returned, so callers detect truncation by checking the count.
///
/// [`fmt::Write`] is implemented, so `write!` works. It reports [`fmt::Error`] when
/// a piece doesn't fit.
///
/// ```
/// use std::fmt::Write;
/// use termal_tui::TextBuffer;
///
/// let mut text = TextBuffer::new(16);
/// write!(text, "{} + {}", 1, 2).unwrap();
/// assert_eq!(text.len(), 5);
/// assert_eq!(text.append_str("this is far too long"), 0);
/// assert_eq!(text.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    code_points: Vec<u32>,
    capacity: usize,
}

impl TextBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            code_points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    #[must_use]
    pub fn len(&self) -> usize { self.code_points.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.code_points.is_empty() }

    /// Room left before the buffer is full.
    #[must_use]
    pub fn remaining(&self) -> usize { self.capacity - self.code_points.len() }

    #[must_use]
    pub fn as_code_points(&self) -> &[u32] { &self.code_points }

    /// Appends every `char` of `text` as a code point. Returns the number appended,
    /// or `0` (and leaves the buffer unchanged) if they don't all fit.
    pub fn append_str(&mut self, text: &str) -> usize {
        let count = text.chars().count();
        if count > self.remaining() {
            return 0;
        }
        self.code_points.extend(text.chars().map(u32::from));
        count
    }

    /// Same as [`Self::append_str`] for raw code points. Values are stored as is, so
    /// `0` (transparent) and control characters are allowed here and handled when
    /// the text is laid out.
    pub fn append_code_points(&mut self, code_points: &[u32]) -> usize {
        if code_points.len() > self.remaining() {
            return 0;
        }
        self.code_points.extend_from_slice(code_points);
        code_points.len()
    }

    /// Empties the buffer. Capacity is kept.
    pub fn clear(&mut self) { self.code_points.clear(); }
}

impl Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if s.is_empty() || self.append_str(s) > 0 {
            Ok(())
        } else {
            Err(fmt::Error)
        }
    }
}

#[cfg(test)]
mod tests_text_buffer {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn append_counts_code_points_not_bytes() {
        let mut text = TextBuffer::new(8);
        assert_eq!(text.append_str("héllo"), 5);
        assert_eq!(
            text.as_code_points(),
            &[0x68, 0xE9, 0x6C, 0x6C, 0x6F]
        );
        assert_eq!(text.remaining(), 3);
    }

    #[test]
    fn append_at_capacity_returns_zero_and_keeps_length() {
        let mut text = TextBuffer::new(4);
        assert_eq!(text.append_str("abcd"), 4);
        assert_eq!(text.append_str("e"), 0);
        assert_eq!(text.append_code_points(&[0x41]), 0);
        assert_eq!(text.len(), 4);
        assert_eq!(text.as_code_points(), &[0x61, 0x62, 0x63, 0x64]);
    }

    #[test]
    fn append_that_would_overflow_writes_nothing() {
        let mut text = TextBuffer::new(5);
        assert_eq!(text.append_str("abc"), 3);
        assert_eq!(text.append_str("def"), 0);
        assert_eq!(text.len(), 3);
        assert_eq!(text.append_str("de"), 2);
        assert_eq!(text.remaining(), 0);
    }

    #[test]
    fn empty_appends_succeed_even_when_full() {
        let mut text = TextBuffer::new(0);
        assert_eq!(text.append_str(""), 0);
        assert!(write!(text, "").is_ok());
        assert!(text.is_empty());
    }

    #[test]
    fn formatted_write_reports_overflow() {
        let mut text = TextBuffer::new(6);
        assert!(write!(text, "x={}", 42).is_ok());
        assert_eq!(text.len(), 4);
        assert!(write!(text, "{}", "toolong").is_err());
        assert_eq!(text.len(), 4);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut text = TextBuffer::new(3);
        text.append_code_points(&[0, 1, 2]);
        text.clear();
        assert!(text.is_empty());
        assert_eq!(text.capacity(), 3);
        assert_eq!(text.append_str("abc"), 3);
    }
}
