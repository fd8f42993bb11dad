// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TRANSPARENT_CELL, View};
use crate::{col, row};

impl View {
    /// Copies this view into `dest`, placed at this view's origin (which is in
    /// `dest`'s coordinates). Transparent cells and cells that land outside `dest`
    /// are skipped. Returns the number of cells copied.
    ///
    /// ```
    /// use termal_tui::{View, TRANSPARENT_CELL};
    ///
    /// let mut dest = View::new(5, 5);
    /// let mut src = View::new(3, 3);
    /// src.fill(u32::from('#'));
    /// src.set_origin(-1, 3);
    ///
    /// // Only the 2 x 2 corner that overlaps `dest` is copied.
    /// assert_eq!(src.composite_into(&mut dest), 4);
    /// ```
    pub fn composite_into(&self, dest: &mut View) -> usize {
        let mut copied = 0;
        for (local_y, row_cells) in self.rows().enumerate() {
            let dest_y = self.origin.row_index.saturating_add_unsigned(local_y);
            for (local_x, &cell) in row_cells.iter().enumerate() {
                if cell == TRANSPARENT_CELL {
                    continue;
                }
                let dest_x = self.origin.col_index.saturating_add_unsigned(local_x);
                if dest.set_cell_at(col(dest_x) + row(dest_y), cell) {
                    copied += 1;
                }
            }
        }
        copied
    }
}
