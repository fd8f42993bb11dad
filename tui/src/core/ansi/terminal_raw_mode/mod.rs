// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios VMIN VTIME ICANON

//! Terminal raw mode.
//!
//! **Cooked mode** (the default) buffers input a line at a time, interprets keys like
//! `Ctrl+C`, and echoes what is typed. **Raw mode** turns all of that off: every byte
//! reaches the program as soon as it is typed, including escape sequences. It also
//! turns off output post-processing, so `\n` no longer implies a carriage return.
//!
//! In raw mode, `VMIN` and `VTIME` decide when a read returns. This module maps a
//! [`ReadTimeout`] onto them, which is what gives
//! [`crate::StdinByteSource::read_byte`] its timeout:
//!
//! | `ReadTimeout` | `VMIN` | `VTIME` | read returns                          |
//! | :------------ | :----- | :------ | :------------------------------------ |
//! | `NonBlocking` | 0      | 0       | at once, maybe with 0 bytes           |
//! | `Tenths(n)`   | 0      | n       | on the first byte, or after n / 10 s  |
//! | `Blocking`    | 1      | 0       | on the first byte                     |
//!
//! You can inspect the same settings from a shell with `stty -a`.

// Attach sources.
pub mod raw_mode_core;
#[cfg(unix)]
mod raw_mode_unix;

// Re-export.
pub use raw_mode_core::*;
#[cfg(unix)]
pub(crate) use raw_mode_unix::{TerminalFd, get_terminal_fd};
