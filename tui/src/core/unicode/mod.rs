// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod code_point_codec;

// Re-export.
pub use code_point_codec::*;
