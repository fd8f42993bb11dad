// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words DECFRA DECSC DECRC DECTCEM

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{ALT_SCREEN_BUFFER, APPLICATION_MOUSE_TRACKING, BUTTON_EVENT_MOUSE_TRACKING,
            CSI_START, CUP_CURSOR_POSITION, DECFRA_FILL_RECT, DECRC_RESTORE_CURSOR,
            DECSC_SAVE_CURSOR, DECTCEM_SHOW_CURSOR, DEC_MODE_RESET, DEC_MODE_SET,
            DEC_PRIVATE_MODE_PREFIX, ED_ERASE_DISPLAY, EL_ERASE_LINE, ERASE_ALL,
            ESC_START, OutputDevice, SGR_MOUSE_MODE, TerminalIoError};

/// Which mouse events the terminal reports. Reports always use the SGR encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseTracking {
    /// Presses, releases, and drags with a button held (mode 1002).
    ButtonEvents,
    /// Every movement, even with no button held (mode 1003).
    AllEvents,
    #[default]
    Off,
}

/// A terminal control sequence. [`Display`] renders the escape bytes.
///
/// Positions are 1-based, as the terminal counts them.
///
/// ```
/// use termal_tui::{MouseTracking, TerminalControl};
///
/// assert_eq!(TerminalControl::HideCursor.to_string(), "\x1b[?25l");
/// assert_eq!(TerminalControl::MoveCursor { col: 3, row: 7 }.to_string(), "\x1b[7;3H");
/// assert_eq!(
///     TerminalControl::SetMouseTracking(MouseTracking::ButtonEvents).to_string(),
///     "\x1b[?1003l\x1b[?1002l\x1b[?1006l\x1b[?1002h\x1b[?1006h"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalControl {
    ShowCursor,
    HideCursor,
    SaveCursor,
    RestoreCursor,
    EnterAlternateScreen,
    ExitAlternateScreen,
    /// Resets every mouse mode first, then enables the requested one.
    SetMouseTracking(MouseTracking),
    MoveCursor { col: u16, row: u16 },
    ClearScreen,
    ClearToEndOfScreen,
    ClearLine,
    /// DECFRA: fills the inclusive rectangle with `ch`. Support varies by terminal.
    FillRect {
        ch: char,
        left: u16,
        top: u16,
        right: u16,
        bottom: u16,
    },
}

fn write_dec_mode(f: &mut Formatter<'_>, mode: u16, enable: bool) -> FmtResult {
    let suffix = if enable { DEC_MODE_SET } else { DEC_MODE_RESET };
    write!(f, "{CSI_START}{DEC_PRIVATE_MODE_PREFIX}{mode}{suffix}")
}

impl Display for TerminalControl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match *self {
            TerminalControl::ShowCursor => write_dec_mode(f, DECTCEM_SHOW_CURSOR, true),
            TerminalControl::HideCursor => write_dec_mode(f, DECTCEM_SHOW_CURSOR, false),
            TerminalControl::SaveCursor => write!(f, "{ESC_START}{DECSC_SAVE_CURSOR}"),
            TerminalControl::RestoreCursor => {
                write!(f, "{ESC_START}{DECRC_RESTORE_CURSOR}")
            }
            TerminalControl::EnterAlternateScreen => {
                write_dec_mode(f, ALT_SCREEN_BUFFER, true)
            }
            TerminalControl::ExitAlternateScreen => {
                write_dec_mode(f, ALT_SCREEN_BUFFER, false)
            }
            TerminalControl::SetMouseTracking(tracking) => {
                write_dec_mode(f, APPLICATION_MOUSE_TRACKING, false)?;
                write_dec_mode(f, BUTTON_EVENT_MOUSE_TRACKING, false)?;
                write_dec_mode(f, SGR_MOUSE_MODE, false)?;
                let mode = match tracking {
                    MouseTracking::ButtonEvents => BUTTON_EVENT_MOUSE_TRACKING,
                    MouseTracking::AllEvents => APPLICATION_MOUSE_TRACKING,
                    MouseTracking::Off => return Ok(()),
                };
                write_dec_mode(f, mode, true)?;
                write_dec_mode(f, SGR_MOUSE_MODE, true)
            }
            TerminalControl::MoveCursor { col, row } => {
                write!(f, "{CSI_START}{row};{col}{CUP_CURSOR_POSITION}")
            }
            TerminalControl::ClearScreen => {
                write!(f, "{CSI_START}{ERASE_ALL}{ED_ERASE_DISPLAY}")
            }
            TerminalControl::ClearToEndOfScreen => {
                write!(f, "{CSI_START}{ED_ERASE_DISPLAY}")
            }
            TerminalControl::ClearLine => write!(f, "{CSI_START}{ERASE_ALL}{EL_ERASE_LINE}"),
            TerminalControl::FillRect {
                ch,
                left,
                top,
                right,
                bottom,
            } => {
                let ch = u32::from(ch);
                write!(
                    f,
                    "{CSI_START}{ch};{top};{left};{bottom};{right}{DECFRA_FILL_RECT}"
                )
            }
        }
    }
}

impl TerminalControl {
    /// Writes the sequences back to back and flushes once.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalIoError`] if the device rejects the write or flush.
    pub fn send_all(
        controls: &[TerminalControl],
        output_device: &mut OutputDevice,
    ) -> Result<(), TerminalIoError> {
        let mut bytes = String::new();
        for control in controls {
            bytes.push_str(&control.to_string());
        }
        output_device.write_all_and_flush(bytes.as_bytes())
    }
}

#[cfg(test)]
mod tests_terminal_control {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(TerminalControl::ShowCursor, "\x1b[?25h")]
    #[test_case(TerminalControl::HideCursor, "\x1b[?25l")]
    #[test_case(TerminalControl::SaveCursor, "\x1b7")]
    #[test_case(TerminalControl::RestoreCursor, "\x1b8")]
    #[test_case(TerminalControl::EnterAlternateScreen, "\x1b[?1049h")]
    #[test_case(TerminalControl::ExitAlternateScreen, "\x1b[?1049l")]
    #[test_case(TerminalControl::MoveCursor { col: 1, row: 1 }, "\x1b[1;1H")]
    #[test_case(TerminalControl::MoveCursor { col: 80, row: 24 }, "\x1b[24;80H")]
    #[test_case(TerminalControl::ClearScreen, "\x1b[2J")]
    #[test_case(TerminalControl::ClearToEndOfScreen, "\x1b[J")]
    #[test_case(TerminalControl::ClearLine, "\x1b[2K")]
    fn renders(control: TerminalControl, expected: &str) {
        assert_eq!(control.to_string(), expected);
    }

    #[test]
    fn mouse_tracking_resets_before_enabling() {
        let reset = "\x1b[?1003l\x1b[?1002l\x1b[?1006l";
        assert_eq!(
            TerminalControl::SetMouseTracking(MouseTracking::Off).to_string(),
            reset
        );
        assert_eq!(
            TerminalControl::SetMouseTracking(MouseTracking::AllEvents).to_string(),
            format!("{reset}\x1b[?1003h\x1b[?1006h")
        );
        assert_eq!(
            TerminalControl::SetMouseTracking(MouseTracking::ButtonEvents).to_string(),
            format!("{reset}\x1b[?1002h\x1b[?1006h")
        );
    }

    #[test]
    fn fill_rect_uses_decfra_parameter_order() {
        let control = TerminalControl::FillRect {
            ch: '#',
            left: 2,
            top: 3,
            right: 10,
            bottom: 5,
        };
        assert_eq!(control.to_string(), "\x1b[35;3;2;5;10$x");
    }

    #[test]
    fn send_all_writes_once_in_order() {
        let (mut device, stdout_mock) = OutputDevice::new_mock();
        TerminalControl::send_all(
            &[TerminalControl::SaveCursor, TerminalControl::ClearLine],
            &mut device,
        )
        .unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b7\x1b[2K");
    }
}
