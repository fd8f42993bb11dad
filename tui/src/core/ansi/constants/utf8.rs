// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! UTF-8 bit patterns.
//!
//! | Code points          | Byte 1     | Byte 2     | Byte 3     | Byte 4     |
//! | :------------------- | :--------- | :--------- | :--------- | :--------- |
//! | `U+0000..=U+007F`    | `0xxxxxxx` |            |            |            |
//! | `U+0080..=U+07FF`    | `110xxxxx` | `10xxxxxx` |            |            |
//! | `U+0800..=U+FFFF`    | `1110xxxx` | `10xxxxxx` | `10xxxxxx` |            |
//! | `U+10000..=U+10FFFF` | `11110xxx` | `10xxxxxx` | `10xxxxxx` | `10xxxxxx` |

/// Largest code point that encodes in 1 byte.
pub const UTF8_1BYTE_MAX_CODE_POINT: u32 = 0x7F;

/// Largest code point that encodes in 2 bytes.
pub const UTF8_2BYTE_MAX_CODE_POINT: u32 = 0x7FF;

/// Largest code point that encodes in 3 bytes.
pub const UTF8_3BYTE_MAX_CODE_POINT: u32 = 0xFFFF;

/// Largest valid Unicode code point.
pub const UTF8_MAX_CODE_POINT: u32 = 0x10_FFFF;

/// UTF-16 surrogate halves, not valid scalar values.
pub const UTF8_SURROGATE_MIN: u32 = 0xD800;
pub const UTF8_SURROGATE_MAX: u32 = 0xDFFF;

/// Lead byte prefix of a 2 byte sequence.
pub const UTF8_2BYTE_MIN: u8 = 0b1100_0000;

/// Lead byte prefix of a 3 byte sequence.
pub const UTF8_3BYTE_MIN: u8 = 0b1110_0000;

/// Lead byte prefix of a 4 byte sequence.
pub const UTF8_4BYTE_MIN: u8 = 0b1111_0000;

/// Prefix of every continuation byte.
pub const UTF8_CONTINUATION_PATTERN: u8 = 0b1000_0000;

/// Payload bits of a continuation byte.
pub const UTF8_CONTINUATION_DATA_MASK: u32 = 0b0011_1111;

/// Bits carried by each continuation byte.
pub const UTF8_CONTINUATION_DATA_BITS: u32 = 6;

/// U+FFFD REPLACEMENT CHARACTER, encoded.
pub const UTF8_REPLACEMENT_CHARACTER: [u8; 3] = [0xEF, 0xBF, 0xBD];
