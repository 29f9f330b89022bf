//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Visible window over the buffer
//! - the text area with optional line number gutter
//! - the status and message bars

pub mod viewport;

mod render;
mod status;

pub use render::{line_number_width, render};
