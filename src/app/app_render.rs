use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::notification::render_notification;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let input_area = layout[0];
        let preview_area = layout[1];
        let help_area = layout[2];

        crate::input::input_render::render_field(self, frame, input_area);

        if self.config.preview.enabled {
            crate::preview::preview_render::render_pane(self, frame, preview_area);
        }

        crate::help_line::render_line(self, frame, help_area);

        // The popup gates itself on visibility, field text and list
        // contents, and clears its hit area when it skips drawing.
        crate::autocomplete::autocomplete_render::render_popup(self, frame, input_area);

        render_notification(frame, &mut self.notification);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
