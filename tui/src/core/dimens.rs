// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Grid dimensions and positions.
//!
//! Use the small builder functions and `+` to make values that read like prose:
//!
//! ```
//! use termal_tui::{col, height, row, width, Pos, Size};
//!
//! let size: Size = width(80) + height(24);
//! let pos: Pos = col(-2) + row(5);
//!
//! assert_eq!(size.col_width, 80);
//! assert_eq!(pos.row_index, 5);
//! assert!(!size.contains(pos));
//! ```

use std::{fmt::{Display, Formatter, Result as FmtResult},
          ops::Add};

/// Number of columns and rows in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub col_width: usize,
    pub row_height: usize,
}

/// A (possibly negative) position in a grid, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub col_index: isize,
    pub row_index: isize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColWidth(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowHeight(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColIndex(pub isize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowIndex(pub isize);

#[must_use]
pub const fn width(it: usize) -> ColWidth { ColWidth(it) }

#[must_use]
pub const fn height(it: usize) -> RowHeight { RowHeight(it) }

#[must_use]
pub const fn col(it: isize) -> ColIndex { ColIndex(it) }

#[must_use]
pub const fn row(it: isize) -> RowIndex { RowIndex(it) }

impl Add<RowHeight> for ColWidth {
    type Output = Size;
    fn add(self, rhs: RowHeight) -> Size {
        Size {
            col_width: self.0,
            row_height: rhs.0,
        }
    }
}

impl Add<ColWidth> for RowHeight {
    type Output = Size;
    fn add(self, rhs: ColWidth) -> Size { rhs + self }
}

impl Add<RowIndex> for ColIndex {
    type Output = Pos;
    fn add(self, rhs: RowIndex) -> Pos {
        Pos {
            col_index: self.0,
            row_index: rhs.0,
        }
    }
}

impl Add<ColIndex> for RowIndex {
    type Output = Pos;
    fn add(self, rhs: ColIndex) -> Pos { rhs + self }
}

impl Size {
    /// Number of cells in the grid.
    #[must_use]
    pub const fn area(&self) -> usize { self.col_width * self.row_height }

    #[must_use]
    pub const fn is_empty(&self) -> bool { self.col_width == 0 || self.row_height == 0 }

    /// Converts a signed position into `(col, row)` indices if it lies inside this
    /// grid.
    #[must_use]
    pub fn checked_index(&self, pos: Pos) -> Option<(usize, usize)> {
        let col_index = usize::try_from(pos.col_index).ok()?;
        let row_index = usize::try_from(pos.row_index).ok()?;
        (col_index < self.col_width && row_index < self.row_height)
            .then_some((col_index, row_index))
    }

    #[must_use]
    pub fn contains(&self, pos: Pos) -> bool { self.checked_index(pos).is_some() }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[width: {}, height: {}]", self.col_width, self.row_height)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[col: {}, row: {}]", self.col_index, self.row_index)
    }
}

#[cfg(test)]
mod tests_dimens {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn builders_compose_in_either_order() {
        assert_eq!(width(4) + height(2), height(2) + width(4));
        assert_eq!(col(1) + row(3), row(3) + col(1));
        assert_eq!((width(4) + height(2)).area(), 8);
    }

    #[test_case(0, 0, Some((0, 0)))]
    #[test_case(4, 2, Some((4, 2)))]
    #[test_case(5, 0, None)]
    #[test_case(0, 3, None)]
    #[test_case(-1, 0, None)]
    #[test_case(0, -1, None)]
    fn checked_index_clips_to_grid(c: isize, r: isize, expected: Option<(usize, usize)>) {
        let size = width(5) + height(3);
        assert_eq!(size.checked_index(col(c) + row(r)), expected);
    }

    #[test]
    fn empty_grid_contains_nothing() {
        let size = width(0) + height(7);
        assert!(size.is_empty());
        assert!(!size.contains(col(0) + row(0)));
    }

    #[test]
    fn display() {
        assert_eq!((width(80) + height(24)).to_string(), "[width: 80, height: 24]");
        assert_eq!((col(-1) + row(2)).to_string(), "[col: -1, row: 2]");
    }
}
