use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// Request-URL input field state
///
/// A single-line wrapper around the textarea widget. Multi-line input
/// cannot occur: Enter is intercepted by the key dispatch before the
/// widget sees it.
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new(seed_url: &str) -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Request URL ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.insert_str(seed_url);

        Self { textarea }
    }

    /// Current field text
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole field text; the cursor lands at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
