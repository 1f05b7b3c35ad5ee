//! Input field rendering
//!
//! The textarea widget draws itself; this module keeps its block in sync
//! with the fetch state so a pending metadata lookup shows a `...` marker
//! in the top-right corner.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
};

use crate::app::App;

pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Request URL ")
        .border_style(Style::default().fg(Color::Cyan));

    if app.metadata.pending {
        block = block.title_top(
            Line::from(" ... ")
                .style(Style::default().fg(Color::DarkGray))
                .right_aligned(),
        );
    }

    app.input.textarea.set_block(block);
    frame.render_widget(&app.input.textarea, area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
