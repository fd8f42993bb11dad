// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod input_device;
pub mod output_device;
pub mod stdout_mock;
pub mod term_size;
pub mod terminal_io_error;
pub mod terminal_session;

// Re-export.
pub use input_device::*;
pub use output_device::*;
pub use stdout_mock::*;
pub use term_size::*;
pub use terminal_io_error::*;
pub use terminal_session::*;
