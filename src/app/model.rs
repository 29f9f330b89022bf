use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::document::{Document, LineSeparator};
use crate::editor::{CursorPosition, EditHistory, Snapshot, TextBuffer};
use crate::ui::viewport::Viewport;

/// Rows reserved below the text: status bar and message bar.
const FOOTER_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete editor session state.
///
/// All state lives here - no global or scattered state. `buffer` and
/// `cursor` are replaced wholesale on every edit, never mutated.
pub struct Model {
    /// The live text
    pub buffer: TextBuffer,
    /// Cursor, always clamped to `buffer`
    pub cursor: CursorPosition,
    /// Undo/redo snapshots
    pub history: EditHistory,
    /// Visible window into `buffer`
    pub viewport: Viewport,
    /// Path the buffer is saved to
    pub file_path: PathBuf,
    /// Separator used when saving
    pub separator: LineSeparator,
    /// Whether the line number gutter is shown
    pub line_numbers: bool,
    /// Terminal size (width, height)
    terminal_size: (u16, u16),
    /// Buffer as last loaded or saved
    saved: TextBuffer,
    /// File on disk mixes `\r\n` with bare `\n` and has not been rewritten
    mixed_endings: bool,
    toast: Option<Toast>,
    /// Whether the session should end
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("cursor", &self.cursor)
            .field("lines", &self.buffer.line_count())
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a session over `document` with the cursor at the origin.
    pub fn new(file_path: PathBuf, document: Document, terminal_size: (u16, u16)) -> Self {
        let mut model = Self {
            saved: document.buffer.clone(),
            buffer: document.buffer,
            cursor: CursorPosition::new(),
            history: EditHistory::new(),
            viewport: Viewport::new(terminal_size.0, terminal_size.1),
            file_path,
            separator: document.separator,
            line_numbers: false,
            terminal_size,
            mixed_endings: document.mixed_endings,
            toast: None,
            should_quit: false,
        };
        if model.mixed_endings {
            model.show_toast(
                ToastLevel::Warning,
                "Mixed line endings: saving an edit writes CRLF throughout",
            );
        }
        model.sync_viewport();
        model
    }

    /// Use `history` for undo/redo (e.g. one with a capacity limit).
    #[must_use]
    pub fn with_history(mut self, history: EditHistory) -> Self {
        self.history = history;
        self
    }

    /// Show or hide the line number gutter.
    #[must_use]
    pub fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self.sync_viewport();
        self
    }

    /// The live (buffer, cursor) pair.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.buffer.clone(), self.cursor)
    }

    /// Replace the live state with `snapshot`.
    pub(super) fn restore(&mut self, snapshot: Snapshot) {
        self.cursor = snapshot.cursor.clamp(&snapshot.buffer);
        self.buffer = snapshot.buffer;
    }

    /// Whether the buffer differs from the last loaded or saved content.
    pub fn is_dirty(&self) -> bool {
        self.buffer != self.saved
    }

    /// Record the live buffer as the saved content.
    pub(super) fn mark_saved(&mut self) {
        self.saved = self.buffer.clone();
        self.mixed_endings = false;
    }

    /// Whether the file on disk still holds mixed line endings that a save
    /// would normalize.
    pub const fn has_mixed_endings(&self) -> bool {
        self.mixed_endings
    }

    /// Display name of the file being edited.
    pub fn file_name(&self) -> String {
        self.file_path.file_name().map_or_else(
            || "untitled".to_string(),
            |s| s.to_string_lossy().to_string(),
        )
    }

    /// Width of the line number gutter, including its trailing space.
    pub fn gutter_width(&self) -> u16 {
        if self.line_numbers {
            crate::ui::line_number_width(self.buffer.line_count()) + 1
        } else {
            0
        }
    }

    /// Rows of text that fit above the footer.
    pub const fn text_rows(&self) -> u16 {
        self.terminal_size.1.saturating_sub(FOOTER_ROWS)
    }

    pub(super) const fn set_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Fit the viewport to the terminal and scroll it to the cursor.
    pub(super) fn sync_viewport(&mut self) {
        let cols = self.terminal_size.0.saturating_sub(self.gutter_width());
        self.viewport = self
            .viewport
            .resize(cols, self.text_rows())
            .clamp_to(self.buffer.line_count())
            .follow(self.cursor);
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(PathBuf::new(), Document::default(), (80, 24))
    }
}
