use ratatui::{
    Frame,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::NotificationState;
use crate::widgets::popup;

/// Render the transient notification in the bottom-right corner
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    let Some(message) = notification.current() else {
        return;
    };
    let message = message.to_string();

    let width = message.as_str().width() as u16 + 4;
    let area = popup::bottom_right_popup(frame.area(), width, 3, 1);

    popup::clear_area(frame, area);
    let paragraph = Paragraph::new(Span::styled(
        format!(" {message} "),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}
