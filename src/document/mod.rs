//! Conversion between file content and [`TextBuffer`]s.
//!
//! This module handles:
//! - Detecting the line separator style (`\n` or `\r\n`)
//! - Splitting decoded text into buffer lines
//! - Re-joining lines for saving
//! - The file-storage port ([`Storage`]) the session reads and writes through

mod storage;

pub use storage::{FsStorage, Storage, StorageError};

use std::path::Path;

use crate::editor::TextBuffer;

/// Line separator used by a document on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineSeparator {
    #[default]
    Lf,
    CrLf,
}

impl LineSeparator {
    /// `CrLf` if `text` contains any `\r\n`, otherwise `Lf`.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// Short label for the status bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lf => "LF",
            Self::CrLf => "CRLF",
        }
    }
}

/// A buffer plus the separator it will be written back with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub buffer: TextBuffer,
    pub separator: LineSeparator,
    /// A `\r\n` document that also contained bare `\n` line breaks.
    /// Encoding writes `\r\n` everywhere, so it no longer matches the source.
    pub mixed_endings: bool,
}

impl Document {
    /// Split `text` into lines on its detected separator.
    ///
    /// Every segment is kept, so content ending in a separator gets a
    /// trailing empty line and [`Document::encode`] reproduces it exactly.
    /// In a `\r\n` document a lone `\n` also starts a new line, and the
    /// document is flagged with [`Document::mixed_endings`].
    pub fn decode(text: &str) -> Self {
        let separator = LineSeparator::detect(text);
        let segments = text.split(separator.as_str()).collect::<Vec<_>>();
        let mixed_endings =
            separator == LineSeparator::CrLf && segments.iter().any(|s| s.contains('\n'));
        let lines = segments.into_iter().flat_map(|segment| segment.split('\n'));
        Self {
            buffer: TextBuffer::from_lines(lines),
            separator,
            mixed_endings,
        }
    }

    /// Join the buffer lines for writing.
    ///
    /// At most one trailing separator is stripped from the joined text and
    /// exactly one is appended back when the result is non-empty.
    pub fn encode(&self) -> String {
        encode(&self.buffer, self.separator)
    }

    /// Read `path` through `storage`; a missing file is a new empty document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not
    /// valid UTF-8.
    pub fn load(storage: &dyn Storage, path: &Path) -> Result<Self, StorageError> {
        let Some(bytes) = storage.read(path)? else {
            tracing::info!(path = %path.display(), "new file");
            return Ok(Self::default());
        };
        let text = String::from_utf8(bytes).map_err(|_| StorageError::Encoding {
            path: path.to_path_buf(),
        })?;
        let doc = Self::decode(&text);
        tracing::info!(
            path = %path.display(),
            lines = doc.buffer.line_count(),
            separator = doc.separator.label(),
            mixed_endings = doc.mixed_endings,
            "opened file"
        );
        Ok(doc)
    }
}

/// Join `buffer` lines with `separator` for writing.
pub fn encode(buffer: &TextBuffer, separator: LineSeparator) -> String {
    let sep = separator.as_str();
    let mut data = buffer.lines().collect::<Vec<_>>().join(sep);
    if data.ends_with(sep) {
        data.truncate(data.len() - sep.len());
    }
    if !data.is_empty() {
        data.push_str(sep);
    }
    data
}
