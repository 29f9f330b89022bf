//! Visible window over a text buffer.
//!
//! The [`Viewport`] tracks which rows and columns of the buffer are on
//! screen. Edits act on the whole buffer; the viewport only decides what
//! slice gets drawn and where the terminal cursor lands.

use std::ops::Range;

use crate::editor::CursorPosition;

/// A rows×cols window at (`offset_y`, `offset_x`) into a buffer.
///
/// Viewports are plain values: every scroll returns a new one.
///
/// # Example
///
/// ```
/// use jot::editor::CursorPosition;
/// use jot::ui::viewport::Viewport;
///
/// let vp = Viewport::new(80, 24);
/// assert_eq!(vp.visible_rows(100), 0..24);
///
/// let vp = vp.follow(CursorPosition::at(30, 0));
/// assert_eq!(vp.visible_rows(100), 7..31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    cols: u16,
    rows: u16,
    offset_y: usize,
    offset_x: usize,
}

impl Viewport {
    /// Create a viewport at the top-left of the buffer.
    ///
    /// # Arguments
    ///
    /// * `cols` - Visible text columns
    /// * `rows` - Visible text rows (excluding status lines)
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            offset_y: 0,
            offset_x: 0,
        }
    }

    /// First visible line.
    pub const fn offset_y(&self) -> usize {
        self.offset_y
    }

    /// First visible column of every line.
    pub const fn offset_x(&self) -> usize {
        self.offset_x
    }

    pub const fn cols(&self) -> u16 {
        self.cols
    }

    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Buffer lines on screen, clamped to `total_lines`.
    pub fn visible_rows(&self, total_lines: usize) -> Range<usize> {
        let start = self.offset_y.min(total_lines);
        let end = (self.offset_y + self.rows as usize).min(total_lines);
        start..end
    }

    /// Shift the window the least amount needed to show `cursor`.
    ///
    /// The cursor needs a whole cell, so a cursor just past the end of a
    /// line that fills the width scrolls one column further.
    #[must_use]
    pub fn follow(self, cursor: CursorPosition) -> Self {
        Self {
            offset_y: follow_axis(self.offset_y, self.rows as usize, cursor.row),
            offset_x: follow_axis(self.offset_x, self.cols as usize, cursor.col),
            ..self
        }
    }

    /// Change the window size, keeping the offsets.
    #[must_use]
    pub const fn resize(self, cols: u16, rows: u16) -> Self {
        Self { cols, rows, ..self }
    }

    /// Keep `offset_y` inside a buffer of `total_lines` lines.
    #[must_use]
    pub fn clamp_to(self, total_lines: usize) -> Self {
        Self {
            offset_y: self.offset_y.min(total_lines.saturating_sub(1)),
            ..self
        }
    }

    /// Cursor position relative to the window, if it is on screen.
    pub fn screen_position(&self, cursor: CursorPosition) -> Option<(usize, usize)> {
        let row = cursor.row.checked_sub(self.offset_y)?;
        let col = cursor.col.checked_sub(self.offset_x)?;
        (row < self.rows as usize && col < self.cols as usize).then_some((row, col))
    }
}

fn follow_axis(offset: usize, span: usize, target: usize) -> usize {
    if span == 0 || target < offset {
        target
    } else if target >= offset + span {
        target + 1 - span
    } else {
        offset
    }
}
