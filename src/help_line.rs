//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::App;

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    // Popup-aware help text: with suggestions open, Tab/arrows act on them
    let help_text = if app.autocomplete.is_visible() && !app.autocomplete.filtered().is_empty() {
        " Tab: Accept | ↑/↓: Navigate | Esc: Close | Enter: Output URL | Ctrl+Y: Copy"
    } else {
        " Enter: Output URL | Ctrl+Q: Output Path+Query | Ctrl+Y: Copy | Esc: Quit"
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}
