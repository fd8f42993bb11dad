// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words VMIN VTIME

//! Platform-agnostic entry points for raw mode.

#[cfg(unix)]
use super::raw_mode_unix;
use crate::TerminalIoError;

/// How long a read of terminal input waits for a byte once raw mode is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadTimeout {
    /// Return right away, with or without data (`VMIN = 0`, `VTIME = 0`).
    NonBlocking,
    /// Wait up to this many tenths of a second for the first byte (`VMIN = 0`,
    /// `VTIME = n`).
    Tenths(u8),
    /// Wait until at least one byte arrives (`VMIN = 1`, `VTIME = 0`).
    Blocking,
}

impl Default for ReadTimeout {
    fn default() -> Self { Self::Tenths(1) }
}

impl ReadTimeout {
    /// The `(VMIN, VTIME)` pair for this timeout.
    #[must_use]
    pub const fn as_vmin_vtime(self) -> (u8, u8) {
        match self {
            ReadTimeout::NonBlocking => (0, 0),
            ReadTimeout::Tenths(tenths) => (0, tenths),
            ReadTimeout::Blocking => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawModeConfig {
    pub read_timeout: ReadTimeout,
}

impl From<ReadTimeout> for RawModeConfig {
    fn from(read_timeout: ReadTimeout) -> Self { Self { read_timeout } }
}

/// Puts the controlling terminal in raw mode. The settings in effect before the
/// first call are saved, and [`disable_raw_mode`] puts them back.
///
/// # Errors
///
/// Returns [`TerminalIoError`] if there is no terminal, or its attributes can't be
/// read or written.
pub fn enable_raw_mode(config: impl Into<RawModeConfig>) -> Result<(), TerminalIoError> {
    let config: RawModeConfig = config.into();

    #[cfg(unix)]
    {
        raw_mode_unix::enable_raw_mode(config)
    }

    #[cfg(not(unix))]
    {
        let _unused = config;
        Err(TerminalIoError::UnsupportedPlatform)
    }
}

/// Restores the terminal settings saved by [`enable_raw_mode`]. Does nothing if raw
/// mode was never enabled.
///
/// # Errors
///
/// Returns [`TerminalIoError`] if the attributes can't be written.
pub fn disable_raw_mode() -> Result<(), TerminalIoError> {
    #[cfg(unix)]
    {
        raw_mode_unix::disable_raw_mode()
    }

    #[cfg(not(unix))]
    {
        Err(TerminalIoError::UnsupportedPlatform)
    }
}

/// Enables raw mode on construction, disables it on drop.
#[derive(Debug)]
pub struct RawModeGuard;

impl RawModeGuard {
    /// # Errors
    ///
    /// See [`enable_raw_mode`].
    pub fn new(config: impl Into<RawModeConfig>) -> Result<Self, TerminalIoError> {
        enable_raw_mode(config)?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = disable_raw_mode() {
            tracing::warn!(%error, "failed to restore terminal settings");
        }
    }
}
