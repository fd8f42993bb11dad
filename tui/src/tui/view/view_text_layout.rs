// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::View;
use crate::{Pos, Size, TextBuffer, col, row};

const NEW_LINE: u32 = '\n' as u32;

/// How text that reaches the right edge is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Continue at column 0 of the next row.
    Wrap,
    /// Drop everything up to the next newline.
    #[default]
    NoWrap,
}

/// Printable means ASCII space through tilde, or any code point from 128 up.
#[must_use]
pub const fn is_printable(code_point: u32) -> bool {
    matches!(code_point, 0x20..=0x7E) || code_point >= 0x80
}

/// A rectangle of a [`View`] that text is laid out in. Layout positions are local to
/// it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutArea {
    pub top_left: Pos,
    pub size: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LayoutOutcome {
    pub written: usize,
    /// Local `(col, row)` where the pass stopped.
    pub end: (usize, usize),
}

impl View {
    /// Lays `text` out starting at the cursor, and leaves the cursor where the pass
    /// stopped (clamped into the grid). Returns the number of cells written.
    ///
    /// - A newline moves to the next row, back to the column the pass started at.
    /// - [`WrapMode::NoWrap`]: code points past the right or bottom edge are dropped.
    /// - [`WrapMode::Wrap`]: reaching the right edge continues at column 0 of the next
    ///   row. Rows past the bottom are dropped.
    /// - A code point that is neither a newline nor [`is_printable`] stops the pass.
    ///
    /// ```
    /// use termal_tui::{serialize, TextBuffer, View, WrapMode};
    ///
    /// let mut view = View::new(3, 2);
    /// let mut text = TextBuffer::new(8);
    /// text.append_str("abcde");
    ///
    /// assert_eq!(view.layout_text(&text, WrapMode::Wrap), 5);
    /// assert_eq!(serialize(&view), b"abc\nde ");
    /// ```
    pub fn layout_text(&mut self, text: &TextBuffer, wrap: WrapMode) -> usize {
        let area = LayoutArea {
            top_left: Pos::default(),
            size: self.size(),
        };
        let outcome = self.layout_in_area(area, self.cursor(), text, wrap);
        self.set_cursor(outcome.end.0, outcome.end.1);
        outcome.written
    }

    /// Lays `text` out inside `area`, starting at local position `start`. Cells that
    /// fall inside `area` but outside this view still advance the column, they just
    /// aren't written or counted.
    pub(crate) fn layout_in_area(
        &mut self,
        area: LayoutArea,
        start: (usize, usize),
        text: &TextBuffer,
        wrap: WrapMode,
    ) -> LayoutOutcome {
        let (start_col, _) = start;
        let (mut cur_col, mut cur_row) = start;
        let mut written = 0;

        for &code_point in text.as_code_points() {
            if code_point == NEW_LINE {
                cur_col = start_col;
                cur_row = cur_row.saturating_add(1);
                continue;
            }

            if !is_printable(code_point) {
                tracing::warn!(
                    message = "text layout stopped at a non printable code point",
                    code_point,
                    written
                );
                break;
            }

            if wrap == WrapMode::Wrap && cur_col >= area.size.col_width {
                cur_col = 0;
                cur_row = cur_row.saturating_add(1);
            }

            let in_area =
                cur_col < area.size.col_width && cur_row < area.size.row_height;
            if !in_area {
                continue;
            }

            if self.set_cell_at(area.cell_pos(cur_col, cur_row), code_point) {
                written += 1;
            }
            cur_col += 1;
        }

        LayoutOutcome {
            written,
            end: (cur_col, cur_row),
        }
    }
}

impl LayoutArea {
    fn cell_pos(&self, local_col: usize, local_row: usize) -> Pos {
        col(self.top_left.col_index.saturating_add_unsigned(local_col))
            + row(self.top_left.row_index.saturating_add_unsigned(local_row))
    }
}
