// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 escape sequence constants, grouped by direction:
//! - **`input_sequences`**: bytes the terminal sends to us (keys, mouse reports).
//! - **`output_sequences`**: bytes we send to the terminal (DEC private modes, cursor,
//!   clears, rectangle fill).
//! - **`utf8`**: bit patterns used by the code point encoder.
//!
//! ```rust
//! use termal_tui::{ANSI_ESC, ALT_SCREEN_BUFFER, UTF8_CONTINUATION_PATTERN};
//!
//! assert_eq!(ANSI_ESC, 0x1B);
//! assert_eq!(ALT_SCREEN_BUFFER, 1049);
//! assert_eq!(UTF8_CONTINUATION_PATTERN, 0b1000_0000);
//! ```

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod input_sequences;
mod output_sequences;
mod utf8;

// Public re-exports (flat API) for convenience.
pub use input_sequences::*;
pub use output_sequences::*;
pub use utf8::*;
