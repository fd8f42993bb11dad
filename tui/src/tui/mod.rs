// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod text_buffer;
pub mod view;

// Re-export.
pub use text_buffer::*;
pub use view::*;
