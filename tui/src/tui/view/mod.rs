// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Views: fixed size grids of code point cells.
//!
//! ```text
//! TextBuffer ──layout_text / print_at / TextPanel──▶ View
//!                                                      │ composite_into
//!                                                      ▼
//!                                                  root View ──serialize / paint──▶ bytes
//! ```
//!
//! Every operation is bounds checked. Nothing panics on an out of range position,
//! it's skipped and left out of the returned count instead.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
pub mod text_panel;
pub mod view_cell_ops;
pub mod view_compositing;
pub mod view_core;
pub mod view_print_ops;
pub mod view_serializer;
pub mod view_text_layout;

// Re-export.
pub use text_panel::*;
pub use view_core::*;
pub use view_serializer::*;
pub use view_text_layout::*;
