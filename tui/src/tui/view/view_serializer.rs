// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Write as _, io::Write};

use super::{Cell, TRANSPARENT_CELL, View, is_printable};
use crate::{TerminalControl, TerminalIoError, append_code_point, write_all_and_flush};

/// Returns the UTF-8 bytes of `view`. See [`serialize_into`].
#[must_use]
pub fn serialize(view: &View) -> Vec<u8> {
    let mut out = Vec::with_capacity(view.as_cells().len() + view.height());
    serialize_into(view, &mut out);
    out
}

/// Appends the UTF-8 encoding of `view` to `out`, rows top to bottom with a `\n`
/// between rows (none after the last). Transparent cells produce no output.
///
/// Returns the number of cells emitted. A cell that is neither transparent nor
/// printable stops serialization there, and what was appended so far stays in
/// `out`.
pub fn serialize_into(view: &View, out: &mut Vec<u8>) -> usize {
    let mut emitted = 0;
    for (row_index, row_cells) in view.rows().enumerate() {
        if row_index > 0 {
            out.push(b'\n');
        }
        match append_row(row_cells, out) {
            Ok(count) => emitted += count,
            Err(count) => return emitted + count,
        }
    }
    emitted
}

/// Draws `view` on a terminal in raw mode, where `\n` doesn't return the carriage.
/// Each row starts with an absolute cursor move to column 1, so the view lands at
/// the top left of the screen.
///
/// `scratch` is cleared and reused, so a render loop allocates only on the first
/// frame. Returns the number of cells emitted (see [`serialize_into`]).
///
/// # Errors
///
/// Returns [`TerminalIoError::Write`] or [`TerminalIoError::ShortWrite`] if the
/// bytes couldn't all be written.
pub fn paint<W: Write + ?Sized>(
    view: &View,
    out: &mut W,
    scratch: &mut Vec<u8>,
) -> Result<usize, TerminalIoError> {
    scratch.clear();
    let mut emitted = 0;
    let mut move_cursor = String::new();

    for (row_index, row_cells) in view.rows().enumerate() {
        let terminal_row = u16::try_from(row_index + 1).unwrap_or(u16::MAX);
        move_cursor.clear();
        // Writing into a String can't fail.
        _ = write!(
            move_cursor,
            "{}",
            TerminalControl::MoveCursor {
                col: 1,
                row: terminal_row,
            }
        );
        scratch.extend_from_slice(move_cursor.as_bytes());

        match append_row(row_cells, scratch) {
            Ok(count) => emitted += count,
            Err(count) => {
                emitted += count;
                break;
            }
        }
    }

    write_all_and_flush(out, scratch)?;
    Ok(emitted)
}

/// `Ok` with the number of cells appended, or `Err` with the number appended before
/// a non printable cell.
fn append_row(row_cells: &[Cell], out: &mut Vec<u8>) -> Result<usize, usize> {
    let mut emitted = 0;
    for &cell in row_cells {
        if cell == TRANSPARENT_CELL {
            continue;
        }
        if !is_printable(cell) {
            tracing::warn!(
                message = "serialization stopped at a non printable cell",
                cell,
                emitted
            );
            return Err(emitted);
        }
        append_code_point(cell, out);
        emitted += 1;
    }
    Ok(emitted)
}
