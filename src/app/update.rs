use crate::app::Model;
use crate::editor::CursorPosition;

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Every command the session understands.
///
/// Produced by the input layer from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    /// Move the cursor one step
    Move(Direction),
    /// Move to the start of the line
    LineHome,
    /// Move to the end of the line
    LineEnd,
    /// Move up one screen
    PageUp,
    /// Move down one screen
    PageDown,

    // Editing
    /// Insert a printable character at the cursor
    InsertChar(char),
    /// Delete the character before the cursor, joining lines at column 0
    Backspace,
    /// Delete the character at the cursor, joining lines at end of line
    DeleteForward,
    /// Delete from the start of the line to the cursor
    DeleteToLineStart,
    /// Delete from the cursor to the end of the line
    DeleteToLineEnd,
    /// Split the line at the cursor
    Newline,

    // History
    Undo,
    Redo,

    // File
    /// Write the buffer to disk
    Save,

    // Window
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// End the session
    Quit,
}

/// Whether `ch` may be inserted into the buffer.
pub(super) fn is_printable(ch: char) -> bool {
    !ch.is_control()
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function; saving is handled
/// by the side-effect pass in the event loop.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Navigation
        Message::Move(direction) => {
            let buffer = &model.buffer;
            model.cursor = match direction {
                Direction::Up => model.cursor.up(buffer),
                Direction::Down => model.cursor.down(buffer),
                Direction::Left => model.cursor.left(buffer),
                Direction::Right => model.cursor.right(buffer),
            };
        }
        Message::LineHome => {
            model.cursor = model.cursor.line_home();
        }
        Message::LineEnd => {
            model.cursor = model.cursor.line_end(&model.buffer);
        }
        Message::PageUp => {
            let page = usize::from(model.viewport.rows()).max(1);
            model.cursor = model.cursor.page_up(&model.buffer, page);
        }
        Message::PageDown => {
            let page = usize::from(model.viewport.rows()).max(1);
            model.cursor = model.cursor.page_down(&model.buffer, page);
        }

        // Editing
        Message::InsertChar(ch) => {
            if is_printable(ch) {
                store_snapshot(&mut model, true);
                let cursor = model.cursor;
                model.buffer = model.buffer.insert_char(ch, cursor.row, cursor.col);
                model.cursor = cursor.right(&model.buffer);
            }
        }
        Message::Backspace => {
            if !model.cursor.beginning_of_file() {
                store_snapshot(&mut model, true);
                let cursor = model.cursor;
                if cursor.col == 0 {
                    let above = cursor.row - 1;
                    let join_col = model.buffer.line_length(above);
                    model.buffer = model.buffer.join_lines(above);
                    model.cursor = CursorPosition::at(above, join_col);
                } else {
                    model.buffer = model.buffer.delete_char(cursor.row, cursor.col - 1);
                    model.cursor = cursor.left(&model.buffer);
                }
            }
        }
        Message::DeleteForward => {
            if !model.cursor.end_of_file(&model.buffer) {
                store_snapshot(&mut model, true);
                let cursor = model.cursor;
                model.buffer = if cursor.end_of_line(&model.buffer) {
                    model.buffer.join_lines(cursor.row)
                } else {
                    model.buffer.delete_char(cursor.row, cursor.col)
                };
            }
        }
        Message::DeleteToLineStart => {
            store_snapshot(&mut model, true);
            let cursor = model.cursor;
            model.buffer = model.buffer.delete_before(cursor.row, cursor.col);
            model.cursor = cursor.line_home();
        }
        Message::DeleteToLineEnd => {
            store_snapshot(&mut model, true);
            let cursor = model.cursor;
            model.buffer = model.buffer.delete_after(cursor.row, cursor.col);
        }
        Message::Newline => {
            store_snapshot(&mut model, true);
            let cursor = model.cursor;
            model.buffer = model.buffer.break_line(cursor.row, cursor.col);
            model.cursor = cursor.enter(&model.buffer);
        }

        // History
        Message::Undo => {
            if model.history.can_undo() {
                // First undo of a chain keeps the live state as the redo target.
                if !model.history.can_redo() {
                    store_snapshot(&mut model, false);
                }
                if let Some(snapshot) = model.history.undo() {
                    tracing::debug!(cursor = ?snapshot.cursor, "undo");
                    model.restore(snapshot);
                }
            }
        }
        Message::Redo => {
            if let Some(snapshot) = model.history.redo() {
                tracing::debug!(cursor = ?snapshot.cursor, "redo");
                model.restore(snapshot);
            }
        }

        // Window
        Message::Resize(width, height) => {
            model.set_terminal_size(width, height);
        }
        Message::Save | Message::Redraw => {}

        // Application
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model.sync_viewport();
    model
}

fn store_snapshot(model: &mut Model, advance: bool) {
    let snapshot = model.snapshot();
    model.history.save(snapshot, advance);
}
