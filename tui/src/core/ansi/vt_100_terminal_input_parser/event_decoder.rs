// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte level state machine that turns raw terminal input into [`InputEvent`]s.
//!
//! ```text
//!                 ┌──────────── not ESC ───────────▶ PlainKey(byte)
//! read byte ──────┤
//!                 └─ ESC ─▶ introducer ─┬─ '[' ─▶ CSI ─┬─ letter ─────▶ NamedKey
//!                                       │              ├─ digits [; m] ~ ▶ NamedKey
//!                                       │              └─ '<' params M/m ▶ Mouse
//!                                       ├─ 'O' ─▶ SS3 ── P..S ─────────▶ NamedKey
//!                                       └─ other ─────────────────────▶ PlainKey(ESC)
//! ```
//!
//! An ESC that does not start a complete, valid sequence degrades to
//! `PlainKey(ESC)`. How the bytes after it are treated depends on why the sequence
//! failed:
//!
//! - **Starved**: the source timed out before the sequence was complete, or the
//!   introducer is not `[` or `O`. The read cursor goes back to just after ESC, so
//!   those bytes come out of later calls as ordinary events. A user typing `ESC` then
//!   `x` (Alt+x in many terminals) sees both keys.
//! - **Rejected**: a byte inside a recognised CSI or SS3 sequence broke the grammar
//!   (eg: `ESC [ Z`, an unknown `~` code, a malformed mouse report). The bytes read
//!   so far are dropped, so no fragment of a garbled sequence leaks out as text.
//!   Parameters longer than [`CSI_PARAMS_MAX_LEN`] or [`MOUSE_PARAMS_MAX_LEN`] are
//!   rejected the same way, which caps one event at [`MAX_ESCAPE_SEQUENCE_LEN`]
//!   bytes. The ring is required to be larger than that, so a replay never meets
//!   an overwritten byte.

use smallvec::SmallVec;

use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ANSI_FUNCTION_KEY_TERMINATOR,
            ANSI_PARAM_SEPARATOR, ANSI_SS3_O, ByteSource, CSI_PARAMS_MAX_LEN,
            CURSOR_KEY_CODE, DEFAULT_INPUT_RING_CAPACITY, InputEvent, InputReadError,
            InputRingBuffer, MAX_ESCAPE_SEQUENCE_LEN, MOUSE_PARAMS_MAX_LEN,
            MOUSE_SGR_MARKER, MOUSE_SGR_PRESS, MOUSE_SGR_RELEASE,
            named_key_from_csi_final, named_key_from_function_code,
            named_key_from_ss3_final, parse_sgr_mouse_params};

/// Outcome of reading the bytes after an ESC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookahead {
    Matched(InputEvent),
    /// Ran out of input, or the introducer is not one we know. Replay.
    Starved,
    /// Grammar violation inside a known sequence. Discard.
    Rejected,
}

/// Reads the next byte or bails out of the enclosing lookahead with
/// [`Lookahead::Starved`].
macro_rules! next_or_starve {
    ($self:ident, $source:ident) => {
        match $self.next_byte($source)? {
            Some(byte) => byte,
            None => return Ok(Lookahead::Starved),
        }
    };
}

/// Decodes input events one at a time. Owns its ring of pending bytes, so several
/// decoders (eg: one per input stream) never interfere.
///
/// ```
/// use termal_tui::{EventDecoder, InputEvent, MockByteSource, MouseButton};
///
/// let mut decoder = EventDecoder::<100>::new();
/// let mut source = MockByteSource::new(b"\x1b[<0;10;20M");
///
/// let InputEvent::Mouse(mouse) = decoder.decode(&mut source).unwrap() else {
///     panic!("expected a mouse event");
/// };
/// assert_eq!((mouse.x, mouse.y, mouse.button), (10, 20, MouseButton::Button1));
/// ```
#[derive(Debug, Clone)]
pub struct EventDecoder<const N: usize = DEFAULT_INPUT_RING_CAPACITY> {
    ring: InputRingBuffer<N>,
}

impl<const N: usize> Default for EventDecoder<N> {
    fn default() -> Self { Self::new() }
}

impl<const N: usize> EventDecoder<N> {
    #[must_use]
    pub const fn new() -> Self {
        const {
            assert!(
                N > MAX_ESCAPE_SEQUENCE_LEN,
                "the input ring must hold the longest escape sequence"
            );
        };
        Self {
            ring: InputRingBuffer::new(),
        }
    }

    /// Bytes already read from the source but not yet turned into events.
    #[must_use]
    pub fn pending_len(&self) -> usize { self.ring.unread_len() }

    /// Returns the next event, reading as many bytes from `source` as needed and no
    /// more. Returns [`InputEvent::NoKey`] if nothing is pending and the source has
    /// nothing before its timeout.
    ///
    /// # Errors
    ///
    /// Returns [`InputReadError`] if `source` fails. The bytes of the event being
    /// decoded stay pending, so calling again after a transient error loses nothing.
    pub fn decode(
        &mut self,
        source: &mut impl ByteSource,
    ) -> Result<InputEvent, InputReadError> {
        let before_event = self.ring.snapshot();

        let Some(first) = self.next_byte(source)? else {
            return Ok(InputEvent::NoKey);
        };

        if first != ANSI_ESC {
            return Ok(InputEvent::PlainKey(first));
        }

        let after_esc = self.ring.snapshot();
        let lookahead = match self.decode_escape_sequence(source) {
            Ok(it) => it,
            Err(error) => {
                self.ring.restore(before_event);
                return Err(error);
            }
        };

        Ok(match lookahead {
            Lookahead::Matched(event) => event,
            Lookahead::Starved => {
                self.ring.restore(after_esc);
                tracing::trace!(
                    replayed = self.ring.unread_len(),
                    "incomplete escape sequence, degrading to plain ESC"
                );
                InputEvent::PlainKey(ANSI_ESC)
            }
            Lookahead::Rejected => {
                tracing::trace!("malformed escape sequence discarded");
                InputEvent::PlainKey(ANSI_ESC)
            }
        })
    }

    /// Pending bytes first, then the source. A byte from the source goes through the
    /// ring so that [`InputRingBuffer::restore`] can replay it.
    fn next_byte(
        &mut self,
        source: &mut impl ByteSource,
    ) -> Result<Option<u8>, InputReadError> {
        if let Some(byte) = self.ring.next_unread() {
            return Ok(Some(byte));
        }
        match source.read_byte()? {
            Some(byte) => {
                self.ring.push(byte);
                Ok(self.ring.next_unread())
            }
            None => Ok(None),
        }
    }

    fn decode_escape_sequence(
        &mut self,
        source: &mut impl ByteSource,
    ) -> Result<Lookahead, InputReadError> {
        match next_or_starve!(self, source) {
            ANSI_CSI_BRACKET => self.decode_csi(source),
            ANSI_SS3_O => self.decode_ss3(source),
            _ => Ok(Lookahead::Starved),
        }
    }

    fn decode_ss3(
        &mut self,
        source: &mut impl ByteSource,
    ) -> Result<Lookahead, InputReadError> {
        let final_byte = next_or_starve!(self, source);
        Ok(matched_named_key(named_key_from_ss3_final(final_byte)))
    }

    fn decode_csi(
        &mut self,
        source: &mut impl ByteSource,
    ) -> Result<Lookahead, InputReadError> {
        let mut byte = next_or_starve!(self, source);

        if byte == MOUSE_SGR_MARKER {
            return self.decode_sgr_mouse(source);
        }

        if !byte.is_ascii_digit() {
            return Ok(matched_named_key(named_key_from_csi_final(byte)));
        }

        let mut code = u32::from(byte - b'0');
        let mut digit_count = 1;
        loop {
            byte = next_or_starve!(self, source);
            if !byte.is_ascii_digit() {
                break;
            }
            digit_count += 1;
            if digit_count > CSI_PARAMS_MAX_LEN {
                return Ok(Lookahead::Rejected);
            }
            code = code.saturating_mul(10).saturating_add(u32::from(byte - b'0'));
        }

        if byte == ANSI_PARAM_SEPARATOR {
            // Modifier digit, not reported.
            let modifier = next_or_starve!(self, source);
            if !modifier.is_ascii_digit() {
                return Ok(Lookahead::Rejected);
            }
            byte = next_or_starve!(self, source);
        }

        if code == CURSOR_KEY_CODE {
            return Ok(matched_named_key(named_key_from_csi_final(byte)));
        }

        if byte != ANSI_FUNCTION_KEY_TERMINATOR {
            return Ok(Lookahead::Rejected);
        }

        Ok(matched_named_key(named_key_from_function_code(code)))
    }

    fn decode_sgr_mouse(
        &mut self,
        source: &mut impl ByteSource,
    ) -> Result<Lookahead, InputReadError> {
        let mut params: SmallVec<[u8; MOUSE_PARAMS_MAX_LEN]> = SmallVec::new();

        let terminator = loop {
            let byte = next_or_starve!(self, source);
            match byte {
                MOUSE_SGR_PRESS | MOUSE_SGR_RELEASE => break byte,
                b'0'..=b'9' | ANSI_PARAM_SEPARATOR => {
                    if params.len() == MOUSE_PARAMS_MAX_LEN {
                        return Ok(Lookahead::Rejected);
                    }
                    params.push(byte);
                }
                _ => return Ok(Lookahead::Rejected),
            }
        };

        Ok(parse_sgr_mouse_params(&params, terminator)
            .map_or(Lookahead::Rejected, |it| {
                Lookahead::Matched(InputEvent::Mouse(it))
            }))
    }
}

fn matched_named_key(maybe_key: Option<crate::NamedKey>) -> Lookahead {
    maybe_key.map_or(Lookahead::Rejected, |key| {
        Lookahead::Matched(InputEvent::NamedKey(key))
    })
}

#[cfg(test)]
mod fixtures {
    use super::*;
    use crate::MockByteSource;

    /// Decodes until the source and the ring are both exhausted.
    pub fn decode_all(bytes: &[u8]) -> Vec<InputEvent> {
        let mut decoder = EventDecoder::<100>::new();
        let mut source = MockByteSource::new(bytes);
        let mut events = vec![];
        loop {
            let event = decoder.decode(&mut source).unwrap();
            if event.is_no_key() && source.remaining_bytes() == 0 {
                break;
            }
            events.push(event);
        }
        events
    }
}

#[cfg(test)]
mod tests_plain_and_named_keys {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{fixtures::decode_all, *};
    use crate::{ALL_NAMED_KEYS, MockByteSource, NamedKey, SEQ_ARROW_UP, csi,
                csi_modified, csi_tilde, generate_named_key_sequence, ss3};

    #[test]
    fn no_input_is_no_key() {
        let mut decoder = EventDecoder::<100>::new();
        let mut source = MockByteSource::default();
        assert_eq!(decoder.decode(&mut source).unwrap(), InputEvent::NoKey);
    }

    #[test]
    fn plain_bytes_pass_through() {
        for byte in (0_u8..=255).filter(|it| *it != ANSI_ESC) {
            let mut decoder = EventDecoder::<100>::new();
            let mut source = MockByteSource::new(&[byte]);
            assert_eq!(
                decoder.decode(&mut source).unwrap(),
                InputEvent::PlainKey(byte)
            );
            assert_eq!(decoder.decode(&mut source).unwrap(), InputEvent::NoKey);
        }
    }

    #[test]
    fn arrow_up_consumes_exactly_three_bytes() {
        let mut decoder = EventDecoder::<100>::new();
        let mut source = MockByteSource::new(SEQ_ARROW_UP).then_bytes(b"x");

        assert_eq!(
            decoder.decode(&mut source).unwrap(),
            InputEvent::NamedKey(NamedKey::ArrowUp)
        );
        assert_eq!(source.read_count(), 3);
        assert_eq!(source.remaining_bytes(), 1);
        assert_eq!(decoder.pending_len(), 0);
        assert_eq!(decoder.decode(&mut source).unwrap(), InputEvent::PlainKey(b'x'));
    }

    #[test]
    fn function_key_f5() {
        assert_eq!(
            decode_all(b"\x1b[15~"),
            vec![InputEvent::NamedKey(NamedKey::F5)]
        );
    }

    #[test]
    fn every_named_key_round_trips() {
        for key in ALL_NAMED_KEYS {
            let bytes = generate_named_key_sequence(key);
            assert_eq!(decode_all(&bytes), vec![InputEvent::NamedKey(key)], "{key:?}");
        }
    }

    #[test_case(&csi(b'P'), NamedKey::F1 ; "csi f1")]
    #[test_case(&csi(b'S'), NamedKey::F4 ; "csi f4")]
    #[test_case(&ss3(b'Q'), NamedKey::F2 ; "ss3 f2")]
    #[test_case(&csi_modified(1, b'A'), NamedKey::ArrowUp ; "shift up")]
    #[test_case(&csi_modified(4, b'D'), NamedKey::ArrowLeft ; "ctrl left")]
    #[test_case(b"\x1b[3;5~", NamedKey::Delete ; "ctrl delete")]
    #[test_case(b"\x1b[24;2~", NamedKey::F12 ; "shift f12")]
    fn alternate_encodings(bytes: &[u8], expected: NamedKey) {
        assert_eq!(decode_all(bytes), vec![InputEvent::NamedKey(expected)]);
    }

    #[test]
    fn keys_back_to_back() {
        let mut bytes = b"a".to_vec();
        bytes.extend(csi_tilde(2));
        bytes.extend(SEQ_ARROW_UP);
        bytes.extend(b"b");
        assert_eq!(
            decode_all(&bytes),
            vec![
                InputEvent::PlainKey(b'a'),
                InputEvent::NamedKey(NamedKey::Insert),
                InputEvent::NamedKey(NamedKey::ArrowUp),
                InputEvent::PlainKey(b'b'),
            ]
        );
    }
}


#[cfg(test)]
mod tests_mouse_reports {
    use pretty_assertions::assert_eq;

    use super::{fixtures::decode_all, *};
    use crate::{ModifierKeysMask, MouseAction, MouseButton, MouseEvent, sgr_mouse};

    #[test]
    fn left_press_at_10_20() {
        assert_eq!(
            decode_all(b"\x1b[<0;10;20M"),
            vec![InputEvent::Mouse(MouseEvent {
                x: 10,
                y: 20,
                button: MouseButton::Button1,
                action: MouseAction::Pressed,
                modifiers: ModifierKeysMask::new(),
                motion: false,
                scroll: false,
            })]
        );
    }

    #[test]
    fn press_drag_release() {
        let mut bytes = sgr_mouse(0, 3, 4, true);
        bytes.extend(sgr_mouse(32, 5, 4, true));
        bytes.extend(sgr_mouse(0, 5, 4, false));

        let events = decode_all(&bytes);
        assert_eq!(events.len(), 3);

        let InputEvent::Mouse(drag) = events[1] else {
            panic!("expected mouse event, got {:?}", events[1]);
        };
        assert!(drag.motion);
        assert_eq!((drag.x, drag.y), (5, 4));

        let InputEvent::Mouse(release) = events[2] else {
            panic!("expected mouse event, got {:?}", events[2]);
        };
        assert_eq!(release.action, MouseAction::Released);
    }

    #[test]
    fn wheel() {
        let events = decode_all(&sgr_mouse(65, 1, 1, true));
        let InputEvent::Mouse(wheel) = events[0] else {
            panic!("expected mouse event, got {:?}", events[0]);
        };
        assert!(wheel.scroll);
        assert_eq!(wheel.button, MouseButton::ScrollDown);
    }

    #[test]
    fn oversized_report_is_discarded() {
        let mut bytes = b"\x1b[<".to_vec();
        bytes.extend(std::iter::repeat_n(b'1', MOUSE_PARAMS_MAX_LEN + 1));
        bytes.push(b'M');
        bytes.push(b'z');

        let events = decode_all(&bytes);
        assert_eq!(events[0], InputEvent::PlainKey(ANSI_ESC));
        // The remainder of the report is read as plain keys after the rejection.
        assert_eq!(events.last(), Some(&InputEvent::PlainKey(b'z')));
    }

    #[test]
    fn mouse_marker_after_digits_is_not_mouse() {
        assert_eq!(decode_all(b"\x1b[1<"), vec![InputEvent::PlainKey(ANSI_ESC)]);
    }
}
