// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bytes that make up keyboard and mouse input sequences.
//!
//! # Keyboard
//!
//! | Sequence        | Key                          |
//! | :-------------- | :--------------------------- |
//! | `ESC [ A..D`    | arrows (up, down, right, left) |
//! | `ESC [ H` / `F` | Home / End                   |
//! | `ESC [ P..S`    | F1 - F4                      |
//! | `ESC O P..S`    | F1 - F4 (SS3 form)           |
//! | `ESC [ n ~`     | Insert, Delete, PageUp, PageDown, F5 - F12 |
//! | `ESC [ 1 ; m X` | cursor key `X` with modifier digit `m` |
//!
//! # Mouse (SGR, DEC mode 1006)
//!
//! `ESC [ < props ; x ; y M` (press or motion) and `... m` (release). `x` and `y` are
//! 1-based. `props` packs the button, modifier, motion and scroll bits described by
//! the `MOUSE_*` constants below.

// ==================== ANSI Sequence Components ====================

/// ESC byte (27 in decimal, 0x1B in hex)
pub const ANSI_ESC: u8 = 0x1B;

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex)
pub const ANSI_CSI_BRACKET: u8 = 0x5B;

/// SS3 'O' byte: second byte of SS3 sequences (0x4F).
pub const ANSI_SS3_O: u8 = b'O';

/// Parameter separator byte: `;` (59 in decimal, 0x3B in hex)
pub const ANSI_PARAM_SEPARATOR: u8 = b';';

/// Function key terminator: `~` (126 in decimal, 0x7E in hex)
pub const ANSI_FUNCTION_KEY_TERMINATOR: u8 = b'~';

// ==================== Cursor Keys (CSI final byte) ====================

pub const ARROW_UP_FINAL: u8 = b'A';
pub const ARROW_DOWN_FINAL: u8 = b'B';
pub const ARROW_RIGHT_FINAL: u8 = b'C';
pub const ARROW_LEFT_FINAL: u8 = b'D';
pub const SPECIAL_HOME_FINAL: u8 = b'H';
pub const SPECIAL_END_FINAL: u8 = b'F';

/// `ESC [ 1 ; m X` carries a modifier for a cursor key. The parameter `1` means the
/// final byte is a cursor key letter, not a `~` terminated code.
pub const CURSOR_KEY_CODE: u32 = 1;

// ==================== Special Keys (CSI n~) ====================

pub const SPECIAL_INSERT_CODE: u32 = 2;
pub const SPECIAL_DELETE_CODE: u32 = 3;
pub const SPECIAL_PAGE_UP_CODE: u32 = 5;
pub const SPECIAL_PAGE_DOWN_CODE: u32 = 6;

// ==================== Function Keys ====================

/// F1 - F4 arrive as `ESC [ P..S` or `ESC O P..S`.
pub const FUNCTION_F1_FINAL: u8 = b'P';
pub const FUNCTION_F2_FINAL: u8 = b'Q';
pub const FUNCTION_F3_FINAL: u8 = b'R';
pub const FUNCTION_F4_FINAL: u8 = b'S';

/// F5 - F12 arrive as `ESC [ n ~`. Note the gaps at 16 and 22.
pub const FUNCTION_F5_CODE: u32 = 15;
pub const FUNCTION_F6_CODE: u32 = 17;
pub const FUNCTION_F7_CODE: u32 = 18;
pub const FUNCTION_F8_CODE: u32 = 19;
pub const FUNCTION_F9_CODE: u32 = 20;
pub const FUNCTION_F10_CODE: u32 = 21;
pub const FUNCTION_F11_CODE: u32 = 23;
pub const FUNCTION_F12_CODE: u32 = 24;

// ==================== SGR Mouse ====================

/// `<` right after `ESC [` starts an SGR mouse report.
pub const MOUSE_SGR_MARKER: u8 = b'<';

/// Terminator of a press (or motion) report.
pub const MOUSE_SGR_PRESS: u8 = b'M';

/// Terminator of a release report.
pub const MOUSE_SGR_RELEASE: u8 = b'm';

/// Upper bound for the `props;x;y` text of one report.
pub const MOUSE_PARAMS_MAX_LEN: usize = 32;

/// Upper bound for the digits of a `CSI code ~` or `CSI 1 ; m X` sequence.
pub const CSI_PARAMS_MAX_LEN: usize = 16;

/// Most bytes the decoder reads for one event, ESC included: `ESC [ <`, a full
/// mouse parameter buffer, and the byte that overflows it. An input ring must hold
/// more than this so a snapshot taken at ESC is never overwritten.
pub const MAX_ESCAPE_SEQUENCE_LEN: usize = 3 + MOUSE_PARAMS_MAX_LEN + 1;

const _: () = assert!(
    2 + CSI_PARAMS_MAX_LEN + 3 <= MAX_ESCAPE_SEQUENCE_LEN,
    "a CSI key sequence must not outgrow the longest mouse report"
);

/// Low two bits of `props` select the button.
pub const MOUSE_BUTTON_BITS: u16 = 0b0000_0011;

/// Bits 2 to 4 of `props` (after shifting right by [`MOUSE_MODIFIER_SHIFT`]).
pub const MOUSE_MODIFIER_BITS: u16 = 0b0000_0111;
pub const MOUSE_MODIFIER_SHIFT: u16 = 2;

/// Bit 5: the pointer moved while the report was generated.
pub const MOUSE_MOTION_FLAG: u16 = 0b0010_0000;

/// Bit 6: the wheel was scrolled.
pub const MOUSE_SCROLL_FLAG: u16 = 0b0100_0000;

// ==================== Modifier bits ====================

/// Modifier bits as they appear in the shifted mouse `props` field.
pub const MODIFIER_SHIFT: u8 = 1;
pub const MODIFIER_ALT: u8 = 2;
pub const MODIFIER_CTRL: u8 = 4;

// ==================== Control keys ====================

/// Ctrl folds a letter onto the low five bits, eg: `Ctrl+Q` arrives as `0x11`.
pub const CTRL_KEY_MASK: u8 = 0x1F;
