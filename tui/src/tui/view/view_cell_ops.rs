// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Cell, View};
use crate::{Pos, Size};

/// Bounds checked cell access.
impl View {
    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: Cell) { self.buffer.fill(value); }

    /// Returns true if `(x, y)` was in bounds and the cell was set.
    pub fn set_cell(&mut self, x: usize, y: usize, value: Cell) -> bool {
        match self.offset_of(x, y) {
            Some(offset) => {
                self.buffer[offset] = value;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get_cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.offset_of(x, y).map(|offset| self.buffer[offset])
    }

    /// Same as [`Self::set_cell`] for a signed position, which is what compositing
    /// and text layout produce.
    pub(super) fn set_cell_at(&mut self, pos: Pos, value: Cell) -> bool {
        match self.size.checked_index(pos) {
            Some((x, y)) => self.set_cell(x, y, value),
            None => false,
        }
    }

    /// Fills the rectangle at `top_left` with `value`, clipped to the grid. Returns
    /// the number of cells set.
    pub fn fill_rect(&mut self, top_left: Pos, rect_size: Size, value: Cell) -> usize {
        let clip = |start: isize, len: usize, limit: usize| {
            let end = start.saturating_add_unsigned(len);
            let start = usize::try_from(start.max(0)).unwrap_or(0).min(limit);
            let end = usize::try_from(end.max(0)).unwrap_or(0).min(limit);
            start..end
        };
        let cols = clip(top_left.col_index, rect_size.col_width, self.width());
        let rows = clip(top_left.row_index, rect_size.row_height, self.height());

        let row_width = self.width();
        for row_index in rows.clone() {
            let start = row_index * row_width;
            self.buffer[start + cols.start..start + cols.end].fill(value);
        }
        cols.len() * rows.len()
    }
}

#[cfg(test)]
mod tests_view_cell_ops {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{SPACE_CELL, col, height, row, width};

    #[test]
    fn set_and_get_in_bounds() {
        let mut view = View::new(3, 2);
        assert!(view.set_cell(2, 1, u32::from('z')));
        assert_eq!(view.get_cell(2, 1), Some(u32::from('z')));
        assert_eq!(view.get_cell(0, 0), Some(SPACE_CELL));
    }

    #[test_case(3, 0)]
    #[test_case(0, 2)]
    #[test_case(usize::MAX, usize::MAX)]
    fn set_out_of_bounds_changes_nothing(x: usize, y: usize) {
        let mut view = View::new(3, 2);
        let before = view.clone();
        assert!(!view.set_cell(x, y, u32::from('z')));
        assert_eq!(view.get_cell(x, y), None);
        assert_eq!(view, before);
    }

    #[test]
    fn empty_view_rejects_every_write() {
        let mut view = View::new(0, 4);
        assert!(!view.set_cell(0, 0, 1));
        view.fill(1);
        assert!(view.as_cells().is_empty());
    }

    #[test]
    fn fill_sets_every_cell() {
        let mut view = View::new(2, 2);
        view.fill(u32::from('#'));
        assert!(view.as_cells().iter().all(|&cell| cell == u32::from('#')));
    }

    #[test]
    fn signed_positions_are_bounds_checked() {
        let mut view = View::new(2, 2);
        assert!(!view.set_cell_at(col(-1) + row(0), 7));
        assert!(view.set_cell_at(col(1) + row(1), 7));
        assert_eq!(view.get_cell(1, 1), Some(7));
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut view = View::new(4, 3);
        view.fill(0);
        let count = view.fill_rect(col(-1) + row(1), width(3) + height(5), 9);
        assert_eq!(count, 4);
        assert_eq!(view.as_cells(), &[0, 0, 0, 0, 9, 9, 0, 0, 9, 9, 0, 0]);

        assert_eq!(view.fill_rect(col(4) + row(0), width(2) + height(2), 5), 0);
        assert_eq!(view.fill_rect(col(-5) + row(0), width(2) + height(2), 5), 0);
    }
}
