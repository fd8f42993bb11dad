// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! VT-100 terminal input decoding.
//!
//! Converts the raw bytes a terminal sends (plain bytes, CSI and SS3 key sequences,
//! SGR mouse reports) into [`InputEvent`]s.
//!
//! ```text
//! stdin (raw mode, VMIN/VTIME timeout)
//!    │ ByteSource::read_byte()
//! ┌──▼─────────────────────────────────────┐
//! │ EventDecoder                            │
//! │  • InputRingBuffer (owned, fixed size)  │
//! │  • snapshot / restore for lookahead     │
//! │  • keyboard + mouse lookup tables       │
//! └────────────────────────────────────────┘
//!    │ one call, one event
//!    ▼
//! InputEvent::{NoKey, PlainKey, NamedKey, Mouse}
//! ```

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod byte_source;
pub mod event_decoder;
pub mod input_read_error;
pub mod input_ring_buffer;
pub mod types;

// Conditionally public modules for documentation and testing.
#[cfg(any(test, doc))]
pub mod keyboard;
#[cfg(not(any(test, doc)))]
mod keyboard;

#[cfg(any(test, doc))]
pub mod mouse;
#[cfg(not(any(test, doc)))]
mod mouse;

// Re-export.
pub use byte_source::*;
pub use event_decoder::*;
pub use input_read_error::*;
pub use input_ring_buffer::*;
pub use keyboard::*;
pub use mouse::*;
pub use types::*;
