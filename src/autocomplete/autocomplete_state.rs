//! Autocomplete suggestion state
//!
//! Tracks the suggestion superset, the filtered subset the popup shows,
//! the highlighted entry, and the compare fragment accumulated from edits
//! while the panel is open. Filtering is case-insensitive substring
//! containment of the compare fragment.

use ratatui::layout::Rect;

/// Autocomplete popup state
pub struct AutocompleteState {
    /// Unfiltered superset: parameter names or enumerated values
    suggestions: Vec<String>,
    /// Subset of the superset matching the compare fragment
    filtered: Vec<String>,
    /// Index of the highlighted entry in `filtered`
    selected_index: usize,
    /// Text typed since the panel opened, used as the filter key
    compare: String,
    /// Whether the popup wants to be shown
    visible: bool,
    /// Popup rectangle drawn last frame and the filtered index of its
    /// first row, kept for mouse hit-testing. None when not drawn.
    popup_area: Option<(Rect, usize)>,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self {
            suggestions: Vec::new(),
            filtered: Vec::new(),
            selected_index: 0,
            compare: String::new(),
            visible: false,
            popup_area: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn compare(&self) -> &str {
        &self.compare
    }

    /// The highlighted suggestion, if the popup is visible and the
    /// highlight points at an existing entry
    pub fn selected(&self) -> Option<&str> {
        if !self.visible {
            return None;
        }
        self.filtered.get(self.selected_index).map(String::as_str)
    }

    /// React to an input edit: grow the compare fragment by the edit
    /// delta and re-filter, then reset the highlight and show the popup.
    ///
    /// The fragment only accumulates while the popup is already open with
    /// a non-empty superset; the keystroke that opens it starts fresh.
    pub fn track_edit(&mut self, previous: &str, current: &str) {
        if self.visible && !self.suggestions.is_empty() {
            let delta = edit_delta(previous, current);
            self.compare.push_str(&delta);
            self.refilter();
        }

        self.selected_index = 0;
        self.visible = true;
    }

    /// Install a new superset (parameter names or enumerated values).
    ///
    /// The filtered list starts out as the full superset and the compare
    /// fragment restarts, so stale fragments from an earlier panel never
    /// filter a fresh list.
    pub fn update_suggestions(&mut self, suggestions: Vec<String>) {
        self.filtered = suggestions.clone();
        self.suggestions = suggestions;
        self.compare.clear();
        self.selected_index = 0;
        self.visible = true;
    }

    /// Move the highlight up, refusing at the first entry
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move the highlight down, clamped to the last entry
    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.filtered.len() {
            self.selected_index += 1;
        }
    }

    /// Close the popup without touching the lists or the fragment, so a
    /// later keystroke reopens it where it left off
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Bookkeeping after a suggestion is accepted: highlight and filtered
    /// list and fragment all reset, popup closes. The superset is kept.
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.filtered.clear();
        self.compare.clear();
        self.visible = false;
    }

    /// Record where the popup was drawn this frame
    pub fn set_popup_area(&mut self, area: Rect, first_row: usize) {
        self.popup_area = Some((area, first_row));
    }

    pub fn clear_popup_area(&mut self) {
        self.popup_area = None;
    }

    /// Map a mouse position to the filtered index of the row under it.
    ///
    /// Returns None when the popup was not drawn or the position falls on
    /// the border or outside the list.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let (area, first_row) = self.popup_area?;

        let inner_x = area.x + 1;
        let inner_y = area.y + 1;
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2);

        if column < inner_x
            || column >= inner_x + inner_width
            || row < inner_y
            || row >= inner_y + inner_height
        {
            return None;
        }

        let index = first_row + (row - inner_y) as usize;
        if index < self.filtered.len() {
            Some(index)
        } else {
            None
        }
    }

    fn refilter(&mut self) {
        let needle = self.compare.to_lowercase();
        self.filtered = self
            .suggestions
            .iter()
            .filter(|s| s.to_lowercase().contains(&needle))
            .cloned()
            .collect();
    }
}

impl Default for AutocompleteState {
    fn default() -> Self {
        Self::new()
    }
}

/// Text added between two input snapshots.
///
/// The previous text is stripped as a prefix when possible; otherwise its
/// first occurrence is removed; otherwise the whole new text is the delta.
/// Deletions and mid-line edits therefore degrade to a whole-text delta,
/// which filters everything out until the panel reopens.
fn edit_delta(previous: &str, current: &str) -> String {
    if let Some(suffix) = current.strip_prefix(previous) {
        return suffix.to_string();
    }

    match current.find(previous) {
        Some(pos) if !previous.is_empty() => {
            let mut delta = String::with_capacity(current.len().saturating_sub(previous.len()));
            delta.push_str(&current[..pos]);
            delta.push_str(&current[pos + previous.len()..]);
            delta
        }
        _ => current.to_string(),
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
