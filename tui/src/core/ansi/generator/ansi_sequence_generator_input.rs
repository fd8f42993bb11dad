// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Builds the byte sequences a terminal sends as input (test fixtures).
//!
//! **This module is for testing only.** It keeps raw bytes in decoder tests readable,
//! and lets tests go `NamedKey` → bytes → decoder → `NamedKey`.

use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ANSI_FUNCTION_KEY_TERMINATOR,
            ANSI_PARAM_SEPARATOR, ANSI_SS3_O, ARROW_DOWN_FINAL, ARROW_LEFT_FINAL,
            ARROW_RIGHT_FINAL, ARROW_UP_FINAL, CURSOR_KEY_CODE, FUNCTION_F10_CODE,
            FUNCTION_F11_CODE, FUNCTION_F12_CODE, FUNCTION_F1_FINAL, FUNCTION_F2_FINAL,
            FUNCTION_F3_FINAL, FUNCTION_F4_FINAL, FUNCTION_F5_CODE, FUNCTION_F6_CODE,
            FUNCTION_F7_CODE, FUNCTION_F8_CODE, FUNCTION_F9_CODE, MOUSE_SGR_MARKER,
            MOUSE_SGR_PRESS, MOUSE_SGR_RELEASE, NamedKey, SPECIAL_DELETE_CODE,
            SPECIAL_END_FINAL, SPECIAL_HOME_FINAL, SPECIAL_INSERT_CODE,
            SPECIAL_PAGE_DOWN_CODE, SPECIAL_PAGE_UP_CODE};

pub const SEQ_ARROW_UP: &[u8] = &[ANSI_ESC, ANSI_CSI_BRACKET, ARROW_UP_FINAL];
pub const SEQ_ARROW_DOWN: &[u8] = &[ANSI_ESC, ANSI_CSI_BRACKET, ARROW_DOWN_FINAL];
pub const SEQ_ARROW_RIGHT: &[u8] = &[ANSI_ESC, ANSI_CSI_BRACKET, ARROW_RIGHT_FINAL];
pub const SEQ_ARROW_LEFT: &[u8] = &[ANSI_ESC, ANSI_CSI_BRACKET, ARROW_LEFT_FINAL];
pub const SEQ_HOME: &[u8] = &[ANSI_ESC, ANSI_CSI_BRACKET, SPECIAL_HOME_FINAL];
pub const SEQ_END: &[u8] = &[ANSI_ESC, ANSI_CSI_BRACKET, SPECIAL_END_FINAL];

/// SS3 form of F1 - F4.
pub const SEQ_F1: &[u8] = &[ANSI_ESC, ANSI_SS3_O, FUNCTION_F1_FINAL];
pub const SEQ_F2: &[u8] = &[ANSI_ESC, ANSI_SS3_O, FUNCTION_F2_FINAL];
pub const SEQ_F3: &[u8] = &[ANSI_ESC, ANSI_SS3_O, FUNCTION_F3_FINAL];
pub const SEQ_F4: &[u8] = &[ANSI_ESC, ANSI_SS3_O, FUNCTION_F4_FINAL];

/// `ESC [ final`
#[must_use]
pub const fn csi(final_byte: u8) -> [u8; 3] { [ANSI_ESC, ANSI_CSI_BRACKET, final_byte] }

/// `ESC O final`
#[must_use]
pub const fn ss3(final_byte: u8) -> [u8; 3] { [ANSI_ESC, ANSI_SS3_O, final_byte] }

/// `ESC [ code ~`
#[must_use]
pub fn csi_tilde(code: u32) -> Vec<u8> {
    let mut seq = vec![ANSI_ESC, ANSI_CSI_BRACKET];
    seq.extend(code.to_string().as_bytes());
    seq.push(ANSI_FUNCTION_KEY_TERMINATOR);
    seq
}

/// `ESC [ 1 ; modifier final`. The modifier digit is `1 + bits`, as terminals send it.
#[must_use]
pub fn csi_modified(modifier_bits: u8, final_byte: u8) -> Vec<u8> {
    let mut seq = vec![ANSI_ESC, ANSI_CSI_BRACKET];
    seq.extend(CURSOR_KEY_CODE.to_string().as_bytes());
    seq.push(ANSI_PARAM_SEPARATOR);
    seq.push(b'1' + modifier_bits);
    seq.push(final_byte);
    seq
}

/// `ESC [ < props ; x ; y M` when `pressed`, else `... m`.
#[must_use]
pub fn sgr_mouse(props: u16, x: u16, y: u16, pressed: bool) -> Vec<u8> {
    let mut seq = vec![ANSI_ESC, ANSI_CSI_BRACKET, MOUSE_SGR_MARKER];
    seq.extend(format!("{props};{x};{y}").as_bytes());
    seq.push(if pressed { MOUSE_SGR_PRESS } else { MOUSE_SGR_RELEASE });
    seq
}

/// The sequence a typical xterm sends for `key`.
#[must_use]
pub fn generate_named_key_sequence(key: NamedKey) -> Vec<u8> {
    match key {
        NamedKey::ArrowUp => SEQ_ARROW_UP.to_vec(),
        NamedKey::ArrowDown => SEQ_ARROW_DOWN.to_vec(),
        NamedKey::ArrowLeft => SEQ_ARROW_LEFT.to_vec(),
        NamedKey::ArrowRight => SEQ_ARROW_RIGHT.to_vec(),
        NamedKey::Home => SEQ_HOME.to_vec(),
        NamedKey::End => SEQ_END.to_vec(),
        NamedKey::Insert => csi_tilde(SPECIAL_INSERT_CODE),
        NamedKey::Delete => csi_tilde(SPECIAL_DELETE_CODE),
        NamedKey::PageUp => csi_tilde(SPECIAL_PAGE_UP_CODE),
        NamedKey::PageDown => csi_tilde(SPECIAL_PAGE_DOWN_CODE),
        NamedKey::F1 => SEQ_F1.to_vec(),
        NamedKey::F2 => SEQ_F2.to_vec(),
        NamedKey::F3 => SEQ_F3.to_vec(),
        NamedKey::F4 => SEQ_F4.to_vec(),
        NamedKey::F5 => csi_tilde(FUNCTION_F5_CODE),
        NamedKey::F6 => csi_tilde(FUNCTION_F6_CODE),
        NamedKey::F7 => csi_tilde(FUNCTION_F7_CODE),
        NamedKey::F8 => csi_tilde(FUNCTION_F8_CODE),
        NamedKey::F9 => csi_tilde(FUNCTION_F9_CODE),
        NamedKey::F10 => csi_tilde(FUNCTION_F10_CODE),
        NamedKey::F11 => csi_tilde(FUNCTION_F11_CODE),
        NamedKey::F12 => csi_tilde(FUNCTION_F12_CODE),
    }
}

/// Every [`NamedKey`], for exhaustive tests.
pub const ALL_NAMED_KEYS: [NamedKey; 22] = [
    NamedKey::ArrowUp,
    NamedKey::ArrowDown,
    NamedKey::ArrowLeft,
    NamedKey::ArrowRight,
    NamedKey::Home,
    NamedKey::End,
    NamedKey::Insert,
    NamedKey::Delete,
    NamedKey::PageUp,
    NamedKey::PageDown,
    NamedKey::F1,
    NamedKey::F2,
    NamedKey::F3,
    NamedKey::F4,
    NamedKey::F5,
    NamedKey::F6,
    NamedKey::F7,
    NamedKey::F8,
    NamedKey::F9,
    NamedKey::F10,
    NamedKey::F11,
    NamedKey::F12,
];
