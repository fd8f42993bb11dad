// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI / VT-100 protocol support: constants, the input decoder, output sequence
//! generation, and raw mode.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules.
mod constants;
mod generator;

// Module is public only when building documentation or tests.
// This allows rustdoc links to work while keeping it private in release builds.
#[cfg(any(test, doc))]
pub mod terminal_raw_mode;
// This module is private in non-test, non-doc builds.
#[cfg(not(any(test, doc)))]
mod terminal_raw_mode;

// Input parsing module - public for protocol access.
pub mod vt_100_terminal_input_parser;

// Re-export flat public API.
pub use constants::*;
pub use generator::*;
pub use terminal_raw_mode::*;
pub use vt_100_terminal_input_parser::*;
