// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Cell, LayoutArea, View, WrapMode};
use crate::{Pos, Size, TextBuffer, col, height, row, width};

/// Default background of a [`TextPanel`].
pub const PANEL_BACKGROUND_CELL: Cell = '.' as Cell;

/// A positioned box of text. It owns no cells: [`TextPanel::render_into`] paints
/// the background and the text straight into a destination [`View`].
///
/// ```
/// use termal_tui::{serialize, TextBuffer, TextPanel, View, WrapMode};
///
/// let mut root = View::new(6, 3);
/// let panel = TextPanel::new(4, 2, 1, 1).with_wrap(WrapMode::Wrap);
/// let mut text = TextBuffer::new(16);
/// text.append_str("hello");
///
/// assert_eq!(panel.render_into(&text, &mut root), 5);
/// assert_eq!(serialize(&root), b"      \n hell \n o... ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPanel {
    pub top_left: Pos,
    pub size: Size,
    pub background: Cell,
    pub wrap: WrapMode,
}

impl TextPanel {
    /// A `panel_width x panel_height` panel at `(x, y)` with a `.` background that
    /// doesn't wrap.
    #[must_use]
    pub fn new(panel_width: usize, panel_height: usize, x: isize, y: isize) -> Self {
        Self {
            top_left: col(x) + row(y),
            size: width(panel_width) + height(panel_height),
            background: PANEL_BACKGROUND_CELL,
            wrap: WrapMode::NoWrap,
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Cell) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    /// Fills the panel's rectangle in `dest` with the background, then lays `text`
    /// out inside it from the panel's top left corner. Anything outside `dest` is
    /// clipped. Returns the number of text cells written.
    pub fn render_into(&self, text: &TextBuffer, dest: &mut View) -> usize {
        dest.fill_rect(self.top_left, self.size, self.background);
        let area = LayoutArea {
            top_left: self.top_left,
            size: self.size,
        };
        dest.layout_in_area(area, (0, 0), text, self.wrap).written
    }
}

#[cfg(test)]
mod tests_text_panel {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::serialize;

    fn text(content: &str) -> TextBuffer {
        let mut it = TextBuffer::new(64);
        it.append_str(content);
        it
    }

    #[test]
    fn background_fills_the_panel_only() {
        let mut root = View::new(4, 3);
        let panel = TextPanel::new(2, 2, 1, 0).with_background(u32::from('~'));

        assert_eq!(panel.render_into(&text(""), &mut root), 0);
        assert_eq!(serialize(&root), b" ~~ \n ~~ \n    ");
    }

    #[test]
    fn no_wrap_keeps_lines_inside_the_panel() {
        let mut root = View::new(5, 2);
        let panel = TextPanel::new(3, 2, 0, 0);

        assert_eq!(panel.render_into(&text("abcdef\ngh"), &mut root), 5);
        assert_eq!(serialize(&root), b"abc  \ngh.  ");
    }

    #[test]
    fn panel_hanging_off_the_view_is_clipped() {
        let mut root = View::new(3, 2);
        let panel = TextPanel::new(3, 3, -1, 1).with_wrap(WrapMode::Wrap);

        // Only panel row 0, columns 1 and 2, land on the view.
        assert_eq!(panel.render_into(&text("abcdef"), &mut root), 2);
        assert_eq!(serialize(&root), b"   \nbc ");
    }

    #[test]
    fn layout_does_not_touch_the_view_cursor() {
        let mut root = View::new(4, 4);
        root.set_cursor(3, 3);
        TextPanel::new(2, 2, 0, 0).render_into(&text("ab"), &mut root);
        assert_eq!(root.cursor(), (3, 3));
    }
}
