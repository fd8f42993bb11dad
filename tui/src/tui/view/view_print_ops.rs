// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TRANSPARENT_CELL, View, is_printable};
use crate::{TextBuffer, col, row};

const NEW_LINE: u32 = '\n' as u32;

impl View {
    /// Prints `text` with its first cell at `(x_off, y_off)`, which may be off the
    /// grid. Unlike [`View::layout_text`] there is no wrapping and the cursor is left
    /// alone.
    ///
    /// - [`TRANSPARENT_CELL`] skips a column without writing, so text can be
    ///   stamped over existing content with holes in it.
    /// - A newline goes back to `x_off` on the next row.
    /// - Printable code points are written when they land on the grid. Ones that
    ///   don't are dropped and the column stays put.
    /// - Any other code point stops printing.
    ///
    /// Returns the number of cells written.
    pub fn print_at(&mut self, x_off: isize, y_off: isize, text: &TextBuffer) -> usize {
        let (mut cur_x, mut cur_y) = (x_off, y_off);
        let mut written = 0;

        for &code_point in text.as_code_points() {
            match code_point {
                TRANSPARENT_CELL => cur_x = cur_x.saturating_add(1),
                NEW_LINE => {
                    cur_x = x_off;
                    cur_y = cur_y.saturating_add(1);
                }
                it if is_printable(it) => {
                    if self.set_cell_at(col(cur_x) + row(cur_y), it) {
                        cur_x = cur_x.saturating_add(1);
                        written += 1;
                    }
                }
                _ => {
                    tracing::warn!(
                        message = "print stopped at a non printable code point",
                        code_point,
                        written
                    );
                    break;
                }
            }
        }

        written
    }
}

#[cfg(test)]
mod tests_view_print_ops {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::serialize;

    #[test]
    fn prints_lines_at_offset() {
        let mut view = View::new(5, 3);
        let mut text = TextBuffer::new(16);
        text.append_str("ab\ncd");

        assert_eq!(view.print_at(1, 1, &text), 4);
        assert_eq!(serialize(&view), b"     \n ab  \n cd  ");
        assert_eq!(view.cursor(), (0, 0));
    }

    #[test]
    fn transparent_skips_a_column() {
        let mut view = View::new(4, 1);
        view.fill(u32::from('.'));
        let mut text = TextBuffer::new(8);
        text.append_code_points(&[u32::from('a'), 0, u32::from('b')]);

        assert_eq!(view.print_at(0, 0, &text), 2);
        assert_eq!(serialize(&view), b"a.b.");
    }

    #[test]
    fn off_grid_cells_are_dropped() {
        let mut view = View::new(3, 2);
        let mut text = TextBuffer::new(16);
        text.append_str("xyz\nabcd");

        assert_eq!(view.print_at(0, -1, &text), 3);
        assert_eq!(serialize(&view), b"abc\n   ");
    }

    #[test]
    fn control_character_stops() {
        let mut view = View::new(4, 1);
        let mut text = TextBuffer::new(8);
        text.append_str("ab");
        text.append_code_points(&[0x1B]);
        text.append_str("c");

        assert_eq!(view.print_at(0, 0, &text), 2);
        assert_eq!(serialize(&view), b"ab  ");
    }
}
