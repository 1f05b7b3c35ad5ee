//! Autocomplete popup rendering
//!
//! Draws the suggestion list just below the input field and records the
//! drawn rectangle for mouse hit-testing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::widgets::popup;

// Autocomplete popup display constants
const MAX_POPUP_WIDTH: usize = 40;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;

/// Render the autocomplete popup below the input field.
///
/// Nothing is drawn while the popup is hidden, the field is empty, or the
/// filtered list is empty.
pub fn render_popup(app: &mut App, frame: &mut Frame, input_area: Rect) {
    app.autocomplete.clear_popup_area();

    if !app.autocomplete.is_visible() || app.input.text().is_empty() {
        return;
    }
    if app.autocomplete.filtered().is_empty() {
        return;
    }

    let max_visible = app.config.popup.max_visible.max(1);
    let selected = app.autocomplete.selected_index();

    // Scroll the window so the highlighted entry stays on screen
    let first_row = selected.saturating_sub(max_visible - 1);
    let visible: Vec<String> = app
        .autocomplete
        .filtered()
        .iter()
        .skip(first_row)
        .take(max_visible)
        .cloned()
        .collect();

    let popup_height = visible.len() as u16 + POPUP_BORDER_HEIGHT;
    let max_text_width = visible
        .iter()
        .map(|s| s.as_str().width())
        .max()
        .unwrap_or(20)
        .min(MAX_POPUP_WIDTH);
    let popup_width = max_text_width as u16 + POPUP_PADDING;

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        // No room below the input field
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let padding = " ".repeat(max_text_width.saturating_sub(text.as_str().width()));

            let line = if first_row + i == selected {
                // Highlight selected item with high contrast colors
                Line::from(Span::styled(
                    format!("► {text}{padding} "),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {text}{padding} "),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };

            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);

    app.autocomplete.set_popup_area(popup_area, first_row);
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
