use std::fmt;
use std::ops::Range;

use ropey::Rope;

/// An immutable sequence of text lines backed by a persistent rope.
///
/// Every edit returns a new buffer and leaves the receiver untouched.
/// Cloning a rope is O(1) and the edited copy shares every node it did
/// not touch, so snapshots held by the undo history stay valid for as
/// long as they are referenced.
///
/// Lines are stored joined by `\n`. There is always at least one line;
/// an empty document is a single empty line.
///
/// Row and column arguments are character indices. Passing a row or
/// column outside the buffer is a caller bug and panics.
///
/// # Example
///
/// ```
/// use jot::editor::TextBuffer;
///
/// let buf = TextBuffer::from_lines(["hello", "world"]);
/// let edited = buf.break_line(0, 2);
/// assert_eq!(edited.lines().collect::<Vec<_>>(), ["he", "llo", "world"]);
/// assert_eq!(buf.line_count(), 2);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Create a buffer holding one empty line.
    pub fn empty() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a buffer from already-split lines.
    ///
    /// Lines must not contain `\n`. An empty iterator yields one empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            assert!(!line.contains('\n'), "line {idx} contains a line break");
            if idx > 0 {
                text.push('\n');
            }
            text.push_str(line);
        }
        Self {
            rope: Rope::from_str(&text),
        }
    }

    /// Total number of lines (always at least 1).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Number of characters in `row`, excluding the line break.
    pub fn line_length(&self, row: usize) -> usize {
        let span = self.line_span(row);
        span.end - span.start
    }

    /// Text of `row` without the line break.
    pub fn line(&self, row: usize) -> String {
        self.rope.slice(self.line_span(row)).to_string()
    }

    /// Characters `[from, from + len)` of `row`, truncated at the line end.
    pub fn line_slice(&self, row: usize, from: usize, len: usize) -> String {
        let span = self.line_span(row);
        let start = (span.start + from).min(span.end);
        let end = start.saturating_add(len).min(span.end);
        self.rope.slice(start..end).to_string()
    }

    /// All lines in order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.line_count()).map(|row| self.line(row))
    }

    /// Remove the character at `col` in `row`.
    #[must_use]
    pub fn delete_char(&self, row: usize, col: usize) -> Self {
        let span = self.line_span(row);
        assert!(
            col < span.end - span.start,
            "delete_char: col {col} out of range for row {row} (len {})",
            span.end - span.start
        );
        self.edited(|rope| rope.remove(span.start + col..=span.start + col))
    }

    /// Insert `ch` at `col` in `row`, shifting later characters right.
    ///
    /// `row == line_count()` materialises a new empty line first.
    #[must_use]
    pub fn insert_char(&self, ch: char, row: usize, col: usize) -> Self {
        assert!(ch != '\n', "insert_char: use break_line to insert a line break");
        let base = if row == self.line_count() {
            self.edited(|rope| {
                let end = rope.len_chars();
                rope.insert_char(end, '\n');
            })
        } else {
            self.clone()
        };
        let start = base.line_start(row);
        base.check_col(row, col);
        base.edited(|rope| rope.insert_char(start + col, ch))
    }

    /// Split `row` at `col`; the suffix becomes a new line right after it.
    #[must_use]
    pub fn break_line(&self, row: usize, col: usize) -> Self {
        let start = self.line_start(row);
        self.check_col(row, col);
        self.edited(|rope| rope.insert_char(start + col, '\n'))
    }

    /// Concatenate `row` and `row + 1` into a single line at `row`.
    #[must_use]
    pub fn join_lines(&self, row: usize) -> Self {
        assert!(
            row + 1 < self.line_count(),
            "join_lines: row {row} has no following line ({} lines)",
            self.line_count()
        );
        let newline = self.line_span(row).end;
        self.edited(|rope| rope.remove(newline..=newline))
    }

    /// Drop characters `[0, col)` of `row`.
    #[must_use]
    pub fn delete_before(&self, row: usize, col: usize) -> Self {
        let start = self.line_start(row);
        self.check_col(row, col);
        self.edited(|rope| rope.remove(start..start + col))
    }

    /// Drop characters `[col, end)` of `row`.
    #[must_use]
    pub fn delete_after(&self, row: usize, col: usize) -> Self {
        let span = self.line_span(row);
        self.check_col(row, col);
        self.edited(|rope| rope.remove(span.start + col..span.end))
    }

    fn edited(&self, edit: impl FnOnce(&mut Rope)) -> Self {
        let mut rope = self.rope.clone();
        edit(&mut rope);
        Self { rope }
    }

    fn line_start(&self, row: usize) -> usize {
        self.check_row(row);
        self.rope.line_to_char(row)
    }

    /// Char range of `row` in the rope, excluding the trailing `\n`.
    fn line_span(&self, row: usize) -> Range<usize> {
        let start = self.line_start(row);
        let end = if row + 1 < self.line_count() {
            self.rope.line_to_char(row + 1) - 1
        } else {
            self.rope.len_chars()
        };
        start..end
    }

    fn check_row(&self, row: usize) {
        assert!(
            row < self.line_count(),
            "row {row} out of range ({} lines)",
            self.line_count()
        );
    }

    fn check_col(&self, row: usize, col: usize) {
        let len = self.line_length(row);
        assert!(col <= len, "col {col} out of range for row {row} (len {len})");
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field(
                "rope",
                &format_args!(
                    "Rope({} lines, {} chars)",
                    self.rope.len_lines(),
                    self.rope.len_chars()
                ),
            )
            .finish()
    }
}
