use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;

use crate::app::{App, Direction, Message, Model};

use super::update::is_printable;

impl App {
    /// Decode one terminal event into a command.
    ///
    /// Escape sequences for arrow and navigation keys arrive already
    /// resolved by crossterm.
    pub(super) fn handle_event(event: &Event) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            Event::FocusGained => Some(Message::Redraw),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Self::handle_control_key(key.code);
        }

        match key.code {
            KeyCode::Up => Some(Message::Move(Direction::Up)),
            KeyCode::Down => Some(Message::Move(Direction::Down)),
            KeyCode::Left => Some(Message::Move(Direction::Left)),
            KeyCode::Right => Some(Message::Move(Direction::Right)),
            KeyCode::Home => Some(Message::LineHome),
            KeyCode::End => Some(Message::LineEnd),
            KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::PageDown => Some(Message::PageDown),
            KeyCode::Backspace => Some(Message::Backspace),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Enter => Some(Message::Newline),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) && is_printable(c) => {
                Some(Message::InsertChar(c))
            }
            _ => None,
        }
    }

    fn handle_control_key(code: KeyCode) -> Option<Message> {
        let KeyCode::Char(c) = code else {
            return None;
        };
        match c.to_ascii_lowercase() {
            'q' => Some(Message::Quit),
            's' => Some(Message::Save),
            'p' => Some(Message::Move(Direction::Up)),
            'n' => Some(Message::Move(Direction::Down)),
            'f' => Some(Message::Move(Direction::Right)),
            'b' => Some(Message::Move(Direction::Left)),
            'a' => Some(Message::LineHome),
            'e' => Some(Message::LineEnd),
            'h' => Some(Message::Backspace),
            'd' => Some(Message::DeleteForward),
            'u' => Some(Message::DeleteToLineStart),
            'k' => Some(Message::DeleteToLineEnd),
            // Ctrl-_ is 0x1F, which terminals may report as Ctrl-7 or Ctrl-/.
            '_' | '7' | '/' | 'z' => Some(Message::Undo),
            'r' => Some(Message::Redo),
            'l' => Some(Message::Redraw),
            _ => None,
        }
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}
