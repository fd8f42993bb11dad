// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios vmin vtime decfra

//! # `termal_tui`
//!
//! The input/output core of a text-mode terminal UI toolkit. It has two halves that
//! share no mutable state:
//!
//! 1. **Input**: [`EventDecoder`] turns a raw byte stream from the keyboard and mouse
//!    into typed [`InputEvent`]s. It disambiguates plain bytes, cursor and function
//!    keys (CSI and SS3 sequences), and SGR mouse reports that arrive interleaved on
//!    one channel. Bytes are pulled on demand from a [`ByteSource`] into a fixed
//!    capacity [`InputRingBuffer`] owned by the decoder.
//! 2. **Output**: a [`View`] is a rectangular grid of code point cells. Views can be
//!    filled, written cell by cell, composited into each other (cell value `0` is
//!    transparent), and receive text from a [`TextBuffer`] with or without wrapping.
//!    [`serialize()`] turns a view into UTF-8 bytes, and [`paint()`] writes them to an
//!    [`OutputDevice`].
//!
//! A thin terminal control layer rounds this out: [`enable_raw_mode()`] with a
//! configurable read timeout (mapped onto `VMIN` / `VTIME`), [`get_size()`],
//! [`TerminalControl`] escape sequences (cursor, alternate screen, mouse reporting,
//! clears, DECFRA rectangle fill), and a [`TerminalSession`] guard that restores the
//! terminal on drop.
//!
//! ## Decoding input
//!
//! ```
//! use termal_tui::{EventDecoder, InputEvent, MockByteSource, NamedKey};
//!
//! let mut decoder = EventDecoder::<100>::new();
//! let mut source = MockByteSource::new(b"q\x1b[A");
//!
//! assert_eq!(decoder.decode(&mut source).unwrap(), InputEvent::PlainKey(b'q'));
//! assert_eq!(
//!     decoder.decode(&mut source).unwrap(),
//!     InputEvent::NamedKey(NamedKey::ArrowUp)
//! );
//! assert_eq!(decoder.decode(&mut source).unwrap(), InputEvent::NoKey);
//! ```
//!
//! ## Compositing and serializing views
//!
//! ```
//! use termal_tui::{serialize, View, TRANSPARENT_CELL};
//!
//! let mut root = View::new(3, 2);
//! let mut child = View::new(2, 1);
//! child.fill(TRANSPARENT_CELL);
//! child.set_cell(1, 0, u32::from('x'));
//! child.set_origin(1, 1);
//!
//! assert_eq!(child.composite_into(&mut root), 1);
//! assert_eq!(serialize(&root), b"   \n  x");
//! ```
//!
//! ## Logging
//!
//! The crate logs with [`tracing`]. Nothing is printed unless the application
//! installs a subscriber, for example with [`try_initialize_logging_global()`]. A
//! full screen app should log to a file, since stdout is the drawing surface.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod core;
pub mod tui;

// Re-export.
pub use crate::core::*;
pub use crate::tui::*;
