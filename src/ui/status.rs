use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};
use crate::document::LineSeparator;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let filename = model.file_name();
    let dirty_indicator = if model.is_dirty() { " [modified]" } else { "" };
    let separator = match model.separator {
        LineSeparator::CrLf => " [CRLF]",
        LineSeparator::Lf => "",
    };
    let cursor = model.cursor;

    let status = format!(
        " {filename}{dirty_indicator}  Ln {}, Col {}{separator}  ^S:save ^Q:quit ^_:undo ^R:redo",
        cursor.row + 1,
        cursor.col + 1
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::Magenta).fg(Color::White));
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
