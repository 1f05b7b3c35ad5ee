//! Mouse click handling
//!
//! Maps a click position to the suggestion row under it and accepts that
//! row, exactly as the Tab path does.

use super::app_state::App;

/// Handle a left mouse button click at the given position
pub fn handle_click(app: &mut App, column: u16, row: u16) {
    let Some(index) = app.autocomplete.hit_test(column, row) else {
        return;
    };
    let Some(choice) = app.autocomplete.filtered().get(index).cloned() else {
        return;
    };

    app.accept_suggestion(&choice);
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
