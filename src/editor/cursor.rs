use super::TextBuffer;

/// Cursor position in a [`TextBuffer`].
///
/// `col` may equal the line length, meaning "just past the last
/// character". Every buffer-aware method returns a position clamped to
/// the buffer it was given; a position is only meaningful against that
/// buffer version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    /// Zero-based line index.
    pub row: usize,
    /// Zero-based character offset within the line.
    pub col: usize,
}

impl CursorPosition {
    /// Create a cursor at row 0, column 0.
    pub const fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Create a cursor at a specific (unclamped) position.
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Clamp the row into the buffer, then the column into that row.
    #[must_use]
    pub fn clamp(self, buffer: &TextBuffer) -> Self {
        let row = self.row.min(buffer.line_count() - 1);
        let col = self.col.min(buffer.line_length(row));
        Self { row, col }
    }

    #[must_use]
    pub fn up(self, buffer: &TextBuffer) -> Self {
        Self::at(self.row.saturating_sub(1), self.col).clamp(buffer)
    }

    #[must_use]
    pub fn down(self, buffer: &TextBuffer) -> Self {
        Self::at(self.row.saturating_add(1), self.col).clamp(buffer)
    }

    /// Move `n` rows up, clamped.
    #[must_use]
    pub fn page_up(self, buffer: &TextBuffer, n: usize) -> Self {
        Self::at(self.row.saturating_sub(n), self.col).clamp(buffer)
    }

    /// Move `n` rows down, clamped.
    #[must_use]
    pub fn page_down(self, buffer: &TextBuffer, n: usize) -> Self {
        Self::at(self.row.saturating_add(n), self.col).clamp(buffer)
    }

    /// One character right, wrapping to the start of the next line.
    #[must_use]
    pub fn right(self, buffer: &TextBuffer) -> Self {
        let here = self.clamp(buffer);
        if !here.end_of_line(buffer) {
            Self::at(here.row, here.col + 1)
        } else if here.end_of_file(buffer) {
            here
        } else {
            Self::at(here.row + 1, 0)
        }
    }

    /// One character left, wrapping to the end of the previous line.
    #[must_use]
    pub fn left(self, buffer: &TextBuffer) -> Self {
        let here = self.clamp(buffer);
        if here.col > 0 {
            Self::at(here.row, here.col - 1)
        } else if here.row > 0 {
            Self::at(here.row - 1, buffer.line_length(here.row - 1))
        } else {
            here
        }
    }

    #[must_use]
    pub const fn line_home(self) -> Self {
        Self::at(self.row, 0)
    }

    #[must_use]
    pub fn line_end(self, buffer: &TextBuffer) -> Self {
        Self::at(self.row, buffer.line_length(self.row))
    }

    /// Start of the line below (used after a line break).
    #[must_use]
    pub fn enter(self, buffer: &TextBuffer) -> Self {
        self.down(buffer).line_home()
    }

    pub fn end_of_line(self, buffer: &TextBuffer) -> bool {
        self.col == buffer.line_length(self.row)
    }

    pub fn last_line(self, buffer: &TextBuffer) -> bool {
        self.row == buffer.line_count() - 1
    }

    /// On the last line and at its end.
    pub fn end_of_file(self, buffer: &TextBuffer) -> bool {
        self.last_line(buffer) && self.end_of_line(buffer)
    }

    pub const fn beginning_of_file(self) -> bool {
        self.row == 0 && self.col == 0
    }
}
