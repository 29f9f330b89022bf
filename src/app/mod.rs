//! Editor session state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete session state (buffer, cursor, history, viewport)
//! - [`Message`]: Every decoded editor command
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, ToastLevel};
pub use update::{Direction, Message, update};

use std::path::PathBuf;

use crate::document::{FsStorage, Storage};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    storage: Box<dyn Storage>,
    line_numbers: bool,
    history_limit: Option<usize>,
}

impl App {
    /// Create a new application for the given file, backed by the filesystem.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            storage: Box::new(FsStorage),
            line_numbers: false,
            history_limit: None,
        }
    }

    /// Read and write documents through `storage` instead of the filesystem.
    #[must_use]
    pub fn with_storage(mut self, storage: Box<dyn Storage>) -> Self {
        self.storage = storage;
        self
    }

    /// Show or hide the line number gutter.
    #[must_use]
    pub const fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    /// Cap the number of undo snapshots kept (`None` = unbounded).
    #[must_use]
    pub const fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }
}
