// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI sequence generation.
//!
//! - [`TerminalControl`]: sequences sent to the terminal (cursor, alternate screen,
//!   mouse reporting, clears, rectangle fill).
//! - `ansi_sequence_generator_input` (test and doc builds only): sequences a terminal
//!   sends as input, used to drive the decoder in tests.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod terminal_control;

// Test/doc-only modules.
#[cfg(any(test, doc))]
mod ansi_sequence_generator_input;

// Public re-exports (flat API).
pub use terminal_control::*;

#[cfg(any(test, doc))]
pub use ansi_sequence_generator_input::*;
