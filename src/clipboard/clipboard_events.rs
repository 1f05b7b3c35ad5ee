//! Clipboard key handling

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

use super::backend::copy_to_clipboard;

/// Handle clipboard-related key events.
///
/// Returns true when the key was consumed.
pub fn handle_clipboard_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return copy_url(app);
    }

    false
}

fn copy_url(app: &mut App) -> bool {
    let url = app.input.text().to_string();
    if url.is_empty() {
        return false;
    }

    match copy_to_clipboard(&url, app.config.clipboard.backend) {
        Ok(()) => app.notification.show("Copied URL!"),
        Err(_) => app.notification.show("Copy failed: clipboard unavailable"),
    }

    true
}
