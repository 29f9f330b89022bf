use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::app::Model;

use super::status;

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let [text_area, status_area, message_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_text(model, frame, text_area);
    status::render_status_bar(model, frame, status_area);
    status::render_toast_bar(model, frame, message_area);
}

fn render_text(model: &Model, frame: &mut Frame, area: Rect) {
    let vp = model.viewport;
    let gutter = model.gutter_width();
    let digits = usize::from(gutter.saturating_sub(1));

    let mut content: Vec<Line> = Vec::new();
    for row in vp.visible_rows(model.buffer.line_count()) {
        let text = model
            .buffer
            .line_slice(row, vp.offset_x(), usize::from(vp.cols()));

        let mut spans = Vec::with_capacity(2);
        if gutter > 0 {
            spans.push(Span::styled(
                format!("{:>digits$} ", row + 1),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::raw(display_text(&text)));
        content.push(Line::from(spans));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);

    // Place the terminal cursor; wide characters before it shift it right.
    if let Some((row, col)) = vp.screen_position(model.cursor) {
        let before = model.buffer.line_slice(model.cursor.row, vp.offset_x(), col);
        let x = u16::try_from(display_width(&before))
            .unwrap_or(u16::MAX)
            .saturating_add(gutter)
            .min(area.width.saturating_sub(1));
        let y = u16::try_from(row).unwrap_or(u16::MAX);
        if y < area.height {
            frame.set_cursor_position((area.x + x, area.y + y));
        }
    }
}

/// Replace control characters, which terminals would interpret, with `?`.
fn display_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { '?' } else { c })
        .collect()
}

/// Terminal columns taken by `text` as drawn by [`display_text`].
fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| {
            if c.is_control() {
                1
            } else {
                c.width().unwrap_or(0)
            }
        })
        .sum()
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_masks_control_chars() {
        assert_eq!(display_text("a\tb\rc"), "a?b?c");
    }

    #[test]
    fn test_display_width_counts_wide_chars_twice() {
        assert_eq!(display_width("ab"), 2);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("\t"), 1);
    }

    #[test]
    fn test_line_number_width() {
        assert_eq!(line_number_width(1), 1);
        assert_eq!(line_number_width(10), 2);
        assert_eq!(line_number_width(999), 3);
        assert_eq!(line_number_width(123_456), 6);
    }
}
