// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR mouse report parsing (DEC mode 1006).
//!
//! The decoder collects the parameter text between `ESC [ <` and the terminating `M`
//! or `m`, then hands it to [`parse_sgr_mouse_params`].
//!
//! `props` bit layout:
//!
//! ```text
//!  6      5      4     3     2      1  0
//! scroll motion ctrl  alt  shift   button
//! ```

use crate::{ANSI_PARAM_SEPARATOR, MOUSE_BUTTON_BITS, MOUSE_MODIFIER_BITS,
            MOUSE_MODIFIER_SHIFT, MOUSE_MOTION_FLAG, MOUSE_SCROLL_FLAG,
            MOUSE_SGR_RELEASE, ModifierKeysMask, MouseAction, MouseButton, MouseEvent};

/// Parses `props;x;y` (ASCII digits and separators only). Returns `None` unless the
/// text holds exactly three numbers that fit in `u16`.
#[must_use]
pub fn parse_sgr_mouse_params(params: &[u8], terminator: u8) -> Option<MouseEvent> {
    let mut fields = params
        .split(|byte| *byte == ANSI_PARAM_SEPARATOR)
        .map(parse_u16);

    let props = fields.next()??;
    let x = fields.next()??;
    let y = fields.next()??;
    if fields.next().is_some() {
        return None;
    }

    let action = if terminator == MOUSE_SGR_RELEASE {
        MouseAction::Released
    } else {
        MouseAction::Pressed
    };

    Some(MouseEvent::from_sgr_props(props, x, y, action))
}

impl MouseEvent {
    /// Unpacks the `props` bit field of an SGR report.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_sgr_props(props: u16, x: u16, y: u16, action: MouseAction) -> Self {
        let scroll = props & MOUSE_SCROLL_FLAG != 0;
        let motion = props & MOUSE_MOTION_FLAG != 0;
        let button_bits = props & MOUSE_BUTTON_BITS;

        let button = if scroll {
            if button_bits == 0 {
                MouseButton::ScrollUp
            } else {
                MouseButton::ScrollDown
            }
        } else {
            match button_bits {
                0 => MouseButton::Button1,
                1 => MouseButton::Button2,
                2 => MouseButton::Button3,
                _ => MouseButton::Button4,
            }
        };

        let modifier_bits = (props >> MOUSE_MODIFIER_SHIFT) & MOUSE_MODIFIER_BITS;

        Self {
            x,
            y,
            button,
            action,
            modifiers: ModifierKeysMask::from_bits(modifier_bits as u8),
            motion,
            scroll,
        }
    }
}

fn parse_u16(field: &[u8]) -> Option<u16> {
    if field.is_empty() {
        return None;
    }
    field.iter().try_fold(0_u16, |acc, byte| {
        if !byte.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u16::from(byte - b'0'))
    })
}

#[cfg(test)]
mod tests_sgr_mouse {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::MOUSE_SGR_PRESS;

    #[test]
    fn left_press() {
        let event = parse_sgr_mouse_params(b"0;10;20", MOUSE_SGR_PRESS).unwrap();
        assert_eq!(
            event,
            MouseEvent {
                x: 10,
                y: 20,
                button: MouseButton::Button1,
                action: MouseAction::Pressed,
                modifiers: ModifierKeysMask::new(),
                motion: false,
                scroll: false,
            }
        );
    }

    #[test]
    fn release_uses_lowercase_terminator() {
        let event = parse_sgr_mouse_params(b"2;1;1", MOUSE_SGR_RELEASE).unwrap();
        assert_eq!(event.action, MouseAction::Released);
        assert_eq!(event.button, MouseButton::Button3);
    }

    #[test_case(64, MouseButton::ScrollUp ; "wheel up")]
    #[test_case(65, MouseButton::ScrollDown ; "wheel down")]
    #[test_case(66, MouseButton::ScrollDown ; "wheel left")]
    #[test_case(67, MouseButton::ScrollDown ; "wheel right")]
    #[test_case(1, MouseButton::Button2 ; "middle")]
    #[test_case(3, MouseButton::Button4 ; "no button")]
    fn button_mapping(props: u16, expected: MouseButton) {
        let event = MouseEvent::from_sgr_props(props, 1, 1, MouseAction::Pressed);
        assert_eq!(event.button, expected);
        assert_eq!(event.scroll, props & 64 != 0);
    }

    #[test]
    fn modifiers_and_motion() {
        // Ctrl (16) + Shift (4) + motion (32) + left button.
        let event = MouseEvent::from_sgr_props(52, 5, 6, MouseAction::Pressed);
        assert!(event.motion);
        assert!(!event.scroll);
        assert_eq!(event.modifiers, ModifierKeysMask::new().with_ctrl().with_shift());

        // Alt (8).
        let event = MouseEvent::from_sgr_props(8, 5, 6, MouseAction::Pressed);
        assert_eq!(event.modifiers, ModifierKeysMask::new().with_alt());
    }

    #[test_case(b"" ; "empty")]
    #[test_case(b"0;10" ; "two fields")]
    #[test_case(b"0;10;20;30" ; "four fields")]
    #[test_case(b"0;;20" ; "empty field")]
    #[test_case(b";10;20" ; "leading separator")]
    #[test_case(b"0;99999;1" ; "overflow")]
    fn malformed_params_are_rejected(params: &[u8]) {
        assert_eq!(parse_sgr_mouse_params(params, MOUSE_SGR_PRESS), None);
    }
}
