// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. storage::StorageError)
    clippy::module_name_repetitions
)]

//! # jot
//!
//! A minimal terminal text editor.
//!
//! jot edits one file at a time with:
//! - Emacs-style control keys plus arrow/Home/End/Page keys
//! - Linear snapshot undo/redo
//! - LF and CRLF files saved back with the separator they were read with
//!
//! ## Architecture
//!
//! jot uses The Elm Architecture (TEA) pattern:
//! - **Model**: Session state (buffer, cursor, history, viewport)
//! - **Message**: Decoded editor commands
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`editor`]: Immutable text buffer, cursor movement, edit history
//! - [`document`]: File decoding/encoding and the storage port
//! - [`app`]: Session state, command handling, main loop
//! - [`ui`]: Viewport and terminal rendering
//! - [`config`]: Runtime options read from the environment

pub mod app;
pub mod config;
pub mod document;
pub mod editor;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::{Document, LineSeparator};
    pub use crate::editor::{CursorPosition, EditHistory, TextBuffer};
    pub use crate::ui::viewport::Viewport;
}
