// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{MouseTracking, OutputDevice, RawModeConfig, TerminalControl, TerminalIoError,
            disable_raw_mode, enable_raw_mode};

/// A full screen terminal session. [`TerminalSession::begin`] switches to raw mode,
/// the alternate screen, hides the cursor, and turns on mouse reporting. Dropping the
/// session (or calling [`TerminalSession::end`]) undoes all of it, in reverse.
///
/// ```no_run
/// use termal_tui::{MouseTracking, OutputDevice, ReadTimeout, TerminalSession};
///
/// let mut session = TerminalSession::begin(
///     ReadTimeout::Tenths(1),
///     MouseTracking::ButtonEvents,
///     OutputDevice::new_stdout(),
/// )?;
/// session.output_device().write_all_and_flush(b"hello")?;
/// session.end()?;
/// # Ok::<(), termal_tui::TerminalIoError>(())
/// ```
#[derive(Debug)]
pub struct TerminalSession {
    output_device: OutputDevice,
    is_active: bool,
}

impl TerminalSession {
    /// Sequences sent after raw mode is enabled.
    #[must_use]
    pub fn setup_sequence(mouse_tracking: MouseTracking) -> [TerminalControl; 5] {
        [
            TerminalControl::SaveCursor,
            TerminalControl::EnterAlternateScreen,
            TerminalControl::HideCursor,
            TerminalControl::ClearScreen,
            TerminalControl::SetMouseTracking(mouse_tracking),
        ]
    }

    /// Sequences sent before raw mode is disabled.
    #[must_use]
    pub fn teardown_sequence() -> [TerminalControl; 4] {
        [
            TerminalControl::SetMouseTracking(MouseTracking::Off),
            TerminalControl::ShowCursor,
            TerminalControl::ExitAlternateScreen,
            TerminalControl::RestoreCursor,
        ]
    }

    /// # Errors
    ///
    /// Returns [`TerminalIoError`] if raw mode can't be enabled or the setup
    /// sequences can't be written. Raw mode is turned back off in the latter case.
    pub fn begin(
        raw_mode_config: impl Into<RawModeConfig>,
        mouse_tracking: MouseTracking,
        mut output_device: OutputDevice,
    ) -> Result<Self, TerminalIoError> {
        enable_raw_mode(raw_mode_config)?;

        if let Err(error) = TerminalControl::send_all(
            &Self::setup_sequence(mouse_tracking),
            &mut output_device,
        ) {
            if let Err(restore_error) = disable_raw_mode() {
                tracing::warn!(%restore_error, "failed to leave raw mode");
            }
            return Err(error);
        }

        tracing::debug!(?mouse_tracking, "terminal session started");
        Ok(Self {
            output_device,
            is_active: true,
        })
    }

    pub fn output_device(&mut self) -> &mut OutputDevice { &mut self.output_device }

    /// Restores the terminal now, reporting any failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`TerminalIoError`] hit while restoring. Restoring continues
    /// past a failed write, so raw mode is always attempted.
    pub fn end(mut self) -> Result<(), TerminalIoError> { self.restore() }

    fn restore(&mut self) -> Result<(), TerminalIoError> {
        if !self.is_active {
            return Ok(());
        }
        self.is_active = false;

        let write_result =
            TerminalControl::send_all(&Self::teardown_sequence(), &mut self.output_device);
        let raw_mode_result = disable_raw_mode();
        tracing::debug!("terminal session ended");

        write_result.and(raw_mode_result)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(error) = self.restore() {
            tracing::warn!(%error, "failed to restore the terminal");
        }
    }
}

#[cfg(test)]
mod tests_terminal_session {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn teardown_reverses_setup() {
        let setup = TerminalSession::setup_sequence(MouseTracking::AllEvents);
        let teardown = TerminalSession::teardown_sequence();

        assert_eq!(setup[0], TerminalControl::SaveCursor);
        assert_eq!(teardown[teardown.len() - 1], TerminalControl::RestoreCursor);
        assert!(setup.contains(&TerminalControl::EnterAlternateScreen));
        assert!(teardown.contains(&TerminalControl::ExitAlternateScreen));
        assert!(teardown.contains(&TerminalControl::SetMouseTracking(MouseTracking::Off)));
    }

    #[test]
    fn setup_renders_expected_bytes() {
        let (mut device, mock) = OutputDevice::new_mock();
        TerminalControl::send_all(
            &TerminalSession::setup_sequence(MouseTracking::Off),
            &mut device,
        )
        .unwrap();
        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            "\x1b7\x1b[?1049h\x1b[?25l\x1b[2J\x1b[?1003l\x1b[?1002l\x1b[?1006l"
        );
    }
}
