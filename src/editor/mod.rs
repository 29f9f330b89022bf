//! The editing engine.
//!
//! Provides a persistent rope-backed text buffer, buffer-aware cursor
//! movement and a snapshot-based undo/redo log. All values are
//! immutable once built; edits return new values, which is what keeps
//! snapshots stored in [`EditHistory`] valid.

mod buffer;
mod cursor;
mod history;

pub use buffer::TextBuffer;
pub use cursor::CursorPosition;
pub use history::{EditHistory, Snapshot};
