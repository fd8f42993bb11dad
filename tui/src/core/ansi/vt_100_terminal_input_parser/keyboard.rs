// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lookup tables from the last byte (or numeric code) of a keyboard sequence to a
//! [`NamedKey`]. The byte level state machine that collects these lives in
//! [`crate::EventDecoder`].

use crate::{ARROW_DOWN_FINAL, ARROW_LEFT_FINAL, ARROW_RIGHT_FINAL, ARROW_UP_FINAL,
            FUNCTION_F10_CODE, FUNCTION_F11_CODE, FUNCTION_F12_CODE, FUNCTION_F1_FINAL,
            FUNCTION_F2_FINAL, FUNCTION_F3_FINAL, FUNCTION_F4_FINAL, FUNCTION_F5_CODE,
            FUNCTION_F6_CODE, FUNCTION_F7_CODE, FUNCTION_F8_CODE, FUNCTION_F9_CODE,
            NamedKey, SPECIAL_DELETE_CODE, SPECIAL_END_FINAL, SPECIAL_HOME_FINAL,
            SPECIAL_INSERT_CODE, SPECIAL_PAGE_DOWN_CODE, SPECIAL_PAGE_UP_CODE};

/// `ESC [ X`: cursor keys, Home / End, and F1 - F4.
#[must_use]
pub fn named_key_from_csi_final(final_byte: u8) -> Option<NamedKey> {
    match final_byte {
        ARROW_UP_FINAL => Some(NamedKey::ArrowUp),
        ARROW_DOWN_FINAL => Some(NamedKey::ArrowDown),
        ARROW_RIGHT_FINAL => Some(NamedKey::ArrowRight),
        ARROW_LEFT_FINAL => Some(NamedKey::ArrowLeft),
        SPECIAL_HOME_FINAL => Some(NamedKey::Home),
        SPECIAL_END_FINAL => Some(NamedKey::End),
        _ => named_key_from_ss3_final(final_byte),
    }
}

/// `ESC O X`: F1 - F4 only.
#[must_use]
pub fn named_key_from_ss3_final(final_byte: u8) -> Option<NamedKey> {
    match final_byte {
        FUNCTION_F1_FINAL => Some(NamedKey::F1),
        FUNCTION_F2_FINAL => Some(NamedKey::F2),
        FUNCTION_F3_FINAL => Some(NamedKey::F3),
        FUNCTION_F4_FINAL => Some(NamedKey::F4),
        _ => None,
    }
}

/// `ESC [ n ~`: editing keys and F5 - F12.
#[must_use]
pub fn named_key_from_function_code(code: u32) -> Option<NamedKey> {
    match code {
        SPECIAL_INSERT_CODE => Some(NamedKey::Insert),
        SPECIAL_DELETE_CODE => Some(NamedKey::Delete),
        SPECIAL_PAGE_UP_CODE => Some(NamedKey::PageUp),
        SPECIAL_PAGE_DOWN_CODE => Some(NamedKey::PageDown),
        FUNCTION_F5_CODE => Some(NamedKey::F5),
        FUNCTION_F6_CODE => Some(NamedKey::F6),
        FUNCTION_F7_CODE => Some(NamedKey::F7),
        FUNCTION_F8_CODE => Some(NamedKey::F8),
        FUNCTION_F9_CODE => Some(NamedKey::F9),
        FUNCTION_F10_CODE => Some(NamedKey::F10),
        FUNCTION_F11_CODE => Some(NamedKey::F11),
        FUNCTION_F12_CODE => Some(NamedKey::F12),
        _ => None,
    }
}

#[cfg(test)]
mod tests_keyboard_tables {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(b'A', Some(NamedKey::ArrowUp))]
    #[test_case(b'B', Some(NamedKey::ArrowDown))]
    #[test_case(b'C', Some(NamedKey::ArrowRight))]
    #[test_case(b'D', Some(NamedKey::ArrowLeft))]
    #[test_case(b'H', Some(NamedKey::Home))]
    #[test_case(b'F', Some(NamedKey::End))]
    #[test_case(b'P', Some(NamedKey::F1))]
    #[test_case(b'S', Some(NamedKey::F4))]
    #[test_case(b'Z', None)]
    #[test_case(b'~', None)]
    fn csi_final_bytes(final_byte: u8, expected: Option<NamedKey>) {
        assert_eq!(named_key_from_csi_final(final_byte), expected);
    }

    #[test]
    fn ss3_only_knows_f1_to_f4() {
        assert_eq!(named_key_from_ss3_final(b'Q'), Some(NamedKey::F2));
        assert_eq!(named_key_from_ss3_final(b'R'), Some(NamedKey::F3));
        assert_eq!(named_key_from_ss3_final(b'A'), None);
        assert_eq!(named_key_from_ss3_final(b'H'), None);
    }

    #[test]
    fn function_codes_have_gaps() {
        let known = [2, 3, 5, 6, 15, 17, 18, 19, 20, 21, 23, 24];
        for code in 0..40 {
            assert_eq!(
                named_key_from_function_code(code).is_some(),
                known.contains(&code),
                "code {code}"
            );
        }
        assert_eq!(named_key_from_function_code(15), Some(NamedKey::F5));
        assert_eq!(named_key_from_function_code(24), Some(NamedKey::F12));
    }
}
