// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixed capacity circular buffer of raw input bytes, owned by one decoder.
//!
//! ```text
//!          read_cursor        write_head
//!               │                 │
//! ┌───┬───┬───┬─▼─┬───┬───┬───┬───▼───┬───┐
//! │   │   │   │ ␛ │ [ │ < │ 0 │       │   │
//! └───┴───┴───┴───┴───┴───┴───┴───────┴───┘
//!               ╰── unread bytes ──╯
//! ```
//!
//! Reads past the write head are impossible: [`InputRingBuffer::next_unread`] returns
//! `None` once the cursor catches up. The read cursor can be saved with
//! [`InputRingBuffer::snapshot`] and put back with [`InputRingBuffer::restore`], which
//! is how the decoder replays bytes after it gives up on an escape sequence.
//!
//! When more than `N - 1` bytes are pushed without being read, the oldest unread byte
//! is overwritten. The decoder only pulls a byte from its source when nothing is
//! unread, and it refuses rings that can't hold [`crate::MAX_ESCAPE_SEQUENCE_LEN`]
//! bytes, so a decoder's ring never overflows.

/// Default ring capacity, well above [`crate::MAX_ESCAPE_SEQUENCE_LEN`].
pub const DEFAULT_INPUT_RING_CAPACITY: usize = 100;

/// Saved position of the read cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingCursor(usize);

#[derive(Debug, Clone)]
pub struct InputRingBuffer<const N: usize = DEFAULT_INPUT_RING_CAPACITY> {
    storage: [u8; N],
    write_head: usize,
    read_cursor: usize,
}

impl<const N: usize> Default for InputRingBuffer<N> {
    fn default() -> Self { Self::new() }
}

impl<const N: usize> InputRingBuffer<N> {
    #[must_use]
    pub const fn new() -> Self {
        const { assert!(N >= 2, "an input ring needs room for ESC plus one byte") };
        Self {
            storage: [0; N],
            write_head: 0,
            read_cursor: 0,
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize { N }

    #[must_use]
    pub fn has_unread(&self) -> bool { self.read_cursor != self.write_head }

    /// Number of bytes pushed but not yet read.
    #[must_use]
    pub fn unread_len(&self) -> usize { (self.write_head + N - self.read_cursor) % N }

    /// Stores `byte` at the write head.
    pub fn push(&mut self, byte: u8) {
        self.storage[self.write_head] = byte;
        self.write_head = (self.write_head + 1) % N;
        if self.write_head == self.read_cursor {
            // Full: drop the oldest unread byte so the ring does not read as empty.
            self.read_cursor = (self.read_cursor + 1) % N;
        }
    }

    /// Returns the byte at the read cursor and advances it.
    pub fn next_unread(&mut self) -> Option<u8> {
        if !self.has_unread() {
            return None;
        }
        let byte = self.storage[self.read_cursor];
        self.read_cursor = (self.read_cursor + 1) % N;
        Some(byte)
    }

    #[must_use]
    pub fn snapshot(&self) -> RingCursor { RingCursor(self.read_cursor) }

    /// Moves the read cursor back to `cursor`, making the bytes read since the
    /// snapshot unread again.
    pub fn restore(&mut self, cursor: RingCursor) { self.read_cursor = cursor.0 % N; }

    /// Drops every unread byte.
    pub fn clear(&mut self) { self.read_cursor = self.write_head; }
}

#[cfg(test)]
mod tests_input_ring_buffer {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fifo_order() {
        let mut ring = InputRingBuffer::<8>::new();
        assert!(!ring.has_unread());
        assert_eq!(ring.next_unread(), None);

        for byte in b"abc" {
            ring.push(*byte);
        }
        assert_eq!(ring.unread_len(), 3);
        assert_eq!(ring.next_unread(), Some(b'a'));
        assert_eq!(ring.next_unread(), Some(b'b'));
        assert_eq!(ring.next_unread(), Some(b'c'));
        assert_eq!(ring.next_unread(), None);
        assert_eq!(ring.unread_len(), 0);
    }

    #[test]
    fn snapshot_and_restore_replay_bytes() {
        let mut ring = InputRingBuffer::<8>::new();
        for byte in b"\x1b[1" {
            ring.push(*byte);
        }
        assert_eq!(ring.next_unread(), Some(0x1b));
        let after_esc = ring.snapshot();
        assert_eq!(ring.next_unread(), Some(b'['));
        assert_eq!(ring.next_unread(), Some(b'1'));

        ring.restore(after_esc);
        assert_eq!(ring.unread_len(), 2);
        assert_eq!(ring.next_unread(), Some(b'['));
    }

    #[test]
    fn wraps_around_the_end() {
        let mut ring = InputRingBuffer::<4>::new();
        for round in 0..10_u8 {
            ring.push(round);
            ring.push(round.wrapping_add(100));
            assert_eq!(ring.next_unread(), Some(round));
            assert_eq!(ring.next_unread(), Some(round.wrapping_add(100)));
        }
        assert!(!ring.has_unread());
    }

    #[test]
    fn overflow_drops_oldest_unread_byte() {
        let mut ring = InputRingBuffer::<4>::new();
        for byte in b"abcde" {
            ring.push(*byte);
        }
        // Capacity 4 holds at most 3 unread bytes.
        assert_eq!(ring.unread_len(), 3);
        assert_eq!(ring.next_unread(), Some(b'c'));
        assert_eq!(ring.next_unread(), Some(b'd'));
        assert_eq!(ring.next_unread(), Some(b'e'));
        assert_eq!(ring.next_unread(), None);
    }

    #[test]
    fn clear_drops_pending_bytes() {
        let mut ring = InputRingBuffer::<DEFAULT_INPUT_RING_CAPACITY>::default();
        assert_eq!(ring.capacity(), 100);
        ring.push(b'x');
        ring.clear();
        assert!(!ring.has_unread());
    }
}
