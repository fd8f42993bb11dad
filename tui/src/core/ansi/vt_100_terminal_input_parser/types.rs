// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logical input events produced by [`crate::EventDecoder`].

use crate::{CTRL_KEY_MASK, MODIFIER_ALT, MODIFIER_CTRL, MODIFIER_SHIFT};

/// One logical input event. Exactly one is produced per call to
/// [`crate::EventDecoder::decode`], never a partial one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Nothing arrived within the byte source's read timeout.
    NoKey,
    /// An ordinary byte. Control combinations are already folded by the terminal,
    /// compare against [`ctrl_key`] to match them.
    PlainKey(u8),
    NamedKey(NamedKey),
    Mouse(MouseEvent),
}

impl InputEvent {
    #[must_use]
    pub fn is_no_key(&self) -> bool { matches!(self, InputEvent::NoKey) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Insert,
    Delete,
    PageUp,
    PageDown,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

/// A decoded SGR mouse report. `x` and `y` are the 1-based terminal coordinates as
/// sent by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
    pub action: MouseAction,
    pub modifiers: ModifierKeysMask,
    pub motion: bool,
    pub scroll: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Button1,
    Button2,
    Button3,
    Button4,
    ScrollUp,
    ScrollDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyState {
    Pressed,
    #[default]
    NotPressed,
}

/// Which modifier keys were held. Use the `with_*` builders to make one:
///
/// ```
/// use termal_tui::{KeyState, ModifierKeysMask};
///
/// let mask = ModifierKeysMask::new().with_ctrl().with_shift();
/// assert_eq!(mask.ctrl_key_state, KeyState::Pressed);
/// assert_eq!(mask.alt_key_state, KeyState::NotPressed);
/// assert_eq!(mask.as_bits(), 0b101);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierKeysMask {
    pub shift_key_state: KeyState,
    pub ctrl_key_state: KeyState,
    pub alt_key_state: KeyState,
}

impl ModifierKeysMask {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt_key_state = KeyState::Pressed;
        self
    }

    /// Builds a mask from the three modifier bits (Shift = 1, Alt = 2, Ctrl = 4).
    /// Higher bits are ignored.
    #[must_use]
    pub fn from_bits(bits: u8) -> Self {
        let state = |bit: u8| {
            if bits & bit == 0 {
                KeyState::NotPressed
            } else {
                KeyState::Pressed
            }
        };
        Self {
            shift_key_state: state(MODIFIER_SHIFT),
            ctrl_key_state: state(MODIFIER_CTRL),
            alt_key_state: state(MODIFIER_ALT),
        }
    }

    #[must_use]
    pub fn as_bits(&self) -> u8 {
        let bit = |state: KeyState, bit: u8| {
            if state == KeyState::Pressed { bit } else { 0 }
        };
        bit(self.shift_key_state, MODIFIER_SHIFT)
            | bit(self.alt_key_state, MODIFIER_ALT)
            | bit(self.ctrl_key_state, MODIFIER_CTRL)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.as_bits() == 0 }
}

/// The byte a terminal sends for `Ctrl` plus `key`, eg: `ctrl_key(b'q') == 0x11`.
#[must_use]
pub const fn ctrl_key(key: u8) -> u8 { key & CTRL_KEY_MASK }

#[cfg(test)]
mod tests_types {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(b'q', 0x11)]
    #[test_case(b'Q', 0x11)]
    #[test_case(b'a', 0x01)]
    #[test_case(b'c', 0x03)]
    #[test_case(b'[', 0x1B)]
    fn ctrl_key_masks_low_five_bits(key: u8, expected: u8) {
        assert_eq!(ctrl_key(key), expected);
    }

    #[test]
    fn modifier_bits_round_trip() {
        for bits in 0..8 {
            assert_eq!(ModifierKeysMask::from_bits(bits).as_bits(), bits);
        }
        assert_eq!(ModifierKeysMask::from_bits(0b1111_1000), ModifierKeysMask::new());
    }

    #[test]
    fn builders_set_individual_keys() {
        assert_eq!(
            ModifierKeysMask::from_bits(MODIFIER_ALT),
            ModifierKeysMask::new().with_alt()
        );
        assert!(ModifierKeysMask::new().is_empty());
        assert!(!ModifierKeysMask::new().with_shift().is_empty());
    }
}
