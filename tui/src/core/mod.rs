// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ansi;
pub mod dimens;
pub mod log;
pub mod terminal_io;
pub mod unicode;

// Re-export.
pub use ansi::*;
pub use dimens::*;
pub use log::*;
pub use terminal_io::*;
pub use unicode::*;
