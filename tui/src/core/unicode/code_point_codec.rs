// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Encodes a single code point (a view cell) into UTF-8.
//!
//! Cells are plain `u32` values, so they can hold anything, including surrogates and
//! values past `U+10FFFF`. Those never reach the output as invalid UTF-8: they are
//! replaced by U+FFFD (`EF BF BD`).

use crate::{UTF8_1BYTE_MAX_CODE_POINT, UTF8_2BYTE_MAX_CODE_POINT, UTF8_2BYTE_MIN,
            UTF8_3BYTE_MAX_CODE_POINT, UTF8_3BYTE_MIN, UTF8_4BYTE_MIN,
            UTF8_CONTINUATION_DATA_BITS, UTF8_CONTINUATION_DATA_MASK,
            UTF8_CONTINUATION_PATTERN, UTF8_MAX_CODE_POINT, UTF8_REPLACEMENT_CHARACTER,
            UTF8_SURROGATE_MAX, UTF8_SURROGATE_MIN};

/// The 1 to 4 byte UTF-8 encoding of one code point. Lives on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedCodePoint {
    bytes: [u8; 4],
    len: u8,
}

impl EncodedCodePoint {
    const REPLACEMENT: Self = Self {
        bytes: [
            UTF8_REPLACEMENT_CHARACTER[0],
            UTF8_REPLACEMENT_CHARACTER[1],
            UTF8_REPLACEMENT_CHARACTER[2],
            0,
        ],
        len: 3,
    };

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes[..usize::from(self.len)] }

    #[must_use]
    pub fn len(&self) -> usize { usize::from(self.len) }

    /// Never true, every code point encodes to at least one byte.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    #[must_use]
    pub fn is_replacement(&self) -> bool { *self == Self::REPLACEMENT }
}

/// Returns true if `code_point` is a Unicode scalar value, ie: it encodes as itself
/// rather than as the replacement character.
#[must_use]
pub const fn is_encodable(code_point: u32) -> bool {
    code_point <= UTF8_MAX_CODE_POINT
        && !(code_point >= UTF8_SURROGATE_MIN && code_point <= UTF8_SURROGATE_MAX)
}

/// Encodes `code_point` using the standard UTF-8 bit patterns.
///
/// ```
/// use termal_tui::encode_code_point;
///
/// assert_eq!(encode_code_point(u32::from('A')).as_bytes(), b"A");
/// assert_eq!(encode_code_point(0x20AC).as_bytes(), "€".as_bytes());
/// assert!(encode_code_point(0xD800).is_replacement());
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode_code_point(code_point: u32) -> EncodedCodePoint {
    if !is_encodable(code_point) {
        return EncodedCodePoint::REPLACEMENT;
    }

    let continuation = |shift: u32| -> u8 {
        UTF8_CONTINUATION_PATTERN
            | ((code_point >> shift) & UTF8_CONTINUATION_DATA_MASK) as u8
    };
    let bits = UTF8_CONTINUATION_DATA_BITS;

    match code_point {
        0..=UTF8_1BYTE_MAX_CODE_POINT => EncodedCodePoint {
            bytes: [code_point as u8, 0, 0, 0],
            len: 1,
        },
        ..=UTF8_2BYTE_MAX_CODE_POINT => EncodedCodePoint {
            bytes: [
                UTF8_2BYTE_MIN | (code_point >> bits) as u8,
                continuation(0),
                0,
                0,
            ],
            len: 2,
        },
        ..=UTF8_3BYTE_MAX_CODE_POINT => EncodedCodePoint {
            bytes: [
                UTF8_3BYTE_MIN | (code_point >> (bits * 2)) as u8,
                continuation(bits),
                continuation(0),
                0,
            ],
            len: 3,
        },
        _ => EncodedCodePoint {
            bytes: [
                UTF8_4BYTE_MIN | (code_point >> (bits * 3)) as u8,
                continuation(bits * 2),
                continuation(bits),
                continuation(0),
            ],
            len: 4,
        },
    }
}

/// Appends the encoding of `code_point` to `out` and returns the number of bytes
/// written.
pub fn append_code_point(code_point: u32, out: &mut Vec<u8>) -> usize {
    let encoded = encode_code_point(code_point);
    out.extend_from_slice(encoded.as_bytes());
    encoded.len()
}
