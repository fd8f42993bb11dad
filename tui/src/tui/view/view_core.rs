// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{Pos, Size, col, height, row, width};

/// One grid cell: a Unicode code point.
pub type Cell = u32;

/// Cells with this value are skipped when compositing and serializing.
pub const TRANSPARENT_CELL: Cell = 0;

/// What a new [`View`] is filled with.
pub const SPACE_CELL: Cell = 0x20;

/// A rectangular grid of [`Cell`]s, stored row major.
///
/// - The buffer length always equals `width * height`, and it is allocated once in
///   [`View::new`].
/// - The `origin` places this view inside another one when it is composited, and
///   may be negative (partially off screen).
/// - The cursor is where [`View::layout_text`] starts. It always stays in
///   `[0, width - 1] x [0, height - 1]`, or at `(0, 0)` for an empty view.
///
/// A `0 x N` view is legal. It holds no cells, so every write to it fails.
#[derive(Clone, PartialEq, Eq)]
pub struct View {
    pub(super) buffer: Vec<Cell>,
    pub(super) size: Size,
    pub(super) origin: Pos,
    pub(super) cursor: (usize, usize),
}

impl Debug for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(
            f,
            "View {{ size: {}, origin: {}, cursor: {:?} }}",
            self.size, self.origin, self.cursor
        )?;
        for row_cells in self.rows() {
            let line: String = row_cells
                .iter()
                .map(|&cell| match cell {
                    TRANSPARENT_CELL => '·',
                    _ => char::from_u32(cell).unwrap_or(char::REPLACEMENT_CHARACTER),
                })
                .collect();
            writeln!(f, "  |{line}|")?;
        }
        Ok(())
    }
}

impl View {
    /// Creates a view filled with spaces, with its origin and cursor at `(0, 0)`.
    #[must_use]
    pub fn new(arg_width: usize, arg_height: usize) -> Self {
        let size = width(arg_width) + height(arg_height);
        Self {
            buffer: vec![SPACE_CELL; size.area()],
            size,
            origin: Pos::default(),
            cursor: (0, 0),
        }
    }

    #[must_use]
    pub fn size(&self) -> Size { self.size }

    #[must_use]
    pub fn width(&self) -> usize { self.size.col_width }

    #[must_use]
    pub fn height(&self) -> usize { self.size.row_height }

    #[must_use]
    pub fn origin(&self) -> Pos { self.origin }

    pub fn set_origin(&mut self, x: isize, y: isize) { self.origin = col(x) + row(y); }

    /// Cursor as `(x, y)`.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) { self.cursor }

    /// Moves the cursor, clamping it into the grid. An empty view keeps it at
    /// `(0, 0)`.
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        if self.size.is_empty() {
            self.cursor = (0, 0);
            return;
        }
        self.cursor = (
            x.min(self.width().saturating_sub(1)),
            y.min(self.height().saturating_sub(1)),
        );
    }

    /// All cells, row major.
    #[must_use]
    pub fn as_cells(&self) -> &[Cell] { &self.buffer }

    /// Iterates over the rows, top to bottom. An empty view with a non zero height
    /// yields that many empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        let row_width = self.width();
        (0..self.height()).map(move |row_index| {
            let start = row_index * row_width;
            &self.buffer[start..start + row_width]
        })
    }

    /// Buffer offset of `(x, y)` if it lies inside the grid.
    pub(super) fn offset_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width() && y < self.height()).then(|| y * self.width() + x)
    }
}

#[cfg(test)]
mod tests_view_core {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_view_is_filled_with_spaces() {
        let view = View::new(4, 3);
        assert_eq!(view.as_cells().len(), 12);
        assert!(view.as_cells().iter().all(|&cell| cell == SPACE_CELL));
        assert_eq!(view.size(), width(4) + height(3));
        assert_eq!(view.origin(), Pos::default());
        assert_eq!(view.cursor(), (0, 0));
    }

    #[test]
    fn cursor_is_clamped_into_bounds() {
        let mut view = View::new(4, 3);
        view.set_cursor(2, 1);
        assert_eq!(view.cursor(), (2, 1));
        view.set_cursor(10, 10);
        assert_eq!(view.cursor(), (3, 2));
    }

    #[test]
    fn empty_view_is_legal() {
        let mut view = View::new(0, 3);
        assert!(view.as_cells().is_empty());
        assert_eq!(view.rows().count(), 3);
        view.set_cursor(5, 5);
        assert_eq!(view.cursor(), (0, 0));

        let mut view = View::new(0, 0);
        view.set_cursor(5, 5);
        assert_eq!(view.cursor(), (0, 0));
    }

    #[test]
    fn origin_can_be_negative() {
        let mut view = View::new(2, 2);
        view.set_origin(-3, 7);
        assert_eq!(view.origin(), col(-3) + row(7));
    }

    #[test]
    fn rows_are_row_major() {
        let mut view = View::new(2, 2);
        view.buffer.copy_from_slice(&[1, 2, 3, 4]);
        let rows: Vec<&[Cell]> = view.rows().collect();
        let expected: Vec<&[Cell]> = vec![&[1, 2][..], &[3, 4][..]];
        assert_eq!(rows, expected);
        assert_eq!(view.offset_of(1, 1), Some(3));
        assert_eq!(view.offset_of(2, 0), None);
    }
}
