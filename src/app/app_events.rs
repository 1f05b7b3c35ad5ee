use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::{App, OutputMode};
use super::mouse_click;
use crate::clipboard::handle_clipboard_key;

impl App {
    /// Handle a terminal event and update application state
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        self.handle_input_key(key);
    }

    /// Handle global keys that work regardless of popup state.
    ///
    /// Returns true if the key was handled, false otherwise.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application without output
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Ctrl+Y: Copy the composed URL
        if handle_clipboard_key(self, key) {
            return true;
        }

        // Tab: Accept the highlighted suggestion. Always consumed; a
        // literal tab character never belongs in a URL.
        if key.code == KeyCode::Tab {
            if self.autocomplete.is_visible() {
                self.accept_selected();
            }
            return true;
        }

        // Shift+Enter / Alt+Enter / Ctrl+Q: Exit and output path + query only.
        // Note: Some terminals (e.g., macOS Terminal.app) don't properly send
        // Shift+Enter or Alt+Enter, so Ctrl+Q is provided as a universal fallback.
        if (key.code == KeyCode::Enter
            && (key.modifiers.contains(KeyModifiers::SHIFT)
                || key.modifiers.contains(KeyModifiers::ALT)))
            || (key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.output_mode = Some(OutputMode::Query);
            self.should_quit = true;
            return true;
        }

        // Enter: Accept when the popup has a highlighted entry, otherwise
        // exit and output the composed URL
        if key.code == KeyCode::Enter {
            if self.autocomplete.selected().is_some() {
                self.accept_selected();
            } else {
                self.output_mode = Some(OutputMode::Url);
                self.should_quit = true;
            }
            return true;
        }

        false
    }

    /// Handle keys for the URL field and the popup attached to it
    fn handle_input_key(&mut self, key: KeyEvent) {
        // ESC: close the popup first; with nothing open, exit without output
        if key.code == KeyCode::Esc {
            if self.autocomplete.is_visible() {
                self.autocomplete.hide();
            } else {
                self.should_quit = true;
            }
            return;
        }

        // Popup navigation
        if self.autocomplete.is_visible() {
            match key.code {
                KeyCode::Down => {
                    self.autocomplete.select_next();
                    return;
                }
                KeyCode::Up => {
                    self.autocomplete.select_previous();
                    return;
                }
                _ => {}
            }
        }

        // Everything else edits the URL
        if self.input.textarea.input(key) {
            self.on_change();
        }
    }

    /// Handle mouse events; a left click on a popup row accepts it
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            mouse_click::handle_click(self, mouse.column, mouse.row);
        }
    }

    /// Handle bracketed paste: insert the text as a single edit
    pub fn handle_paste_event(&mut self, text: String) {
        // The field is single-line; line breaks in pasted text are noise
        let text = text.replace(['\r', '\n'], "");
        if self.input.textarea.insert_str(&text) {
            self.on_change();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
