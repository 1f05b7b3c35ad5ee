//! Request preview state
//!
//! Keeps a parsed breakdown of the URL currently in the input field. The
//! controller refreshes it on every content change and whenever metadata
//! arrives, so the pane can mark parameters the manifest does not know.

use crate::metadata::AutocompleteOptions;
use crate::sample_url::{parse_sample_url, query_pairs};

/// One query parameter shown in the preview pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    pub name: String,
    pub value: Option<String>,
    /// Whether the manifest knows this parameter; None without metadata
    /// for the current path
    pub known: Option<bool>,
}

/// Parsed breakdown of the current URL
pub struct PreviewState {
    /// Request path without a leading slash, None while empty
    pub path: Option<String>,
    /// Version segment, e.g. "v1.0" or "beta"
    pub version: Option<String>,
    /// Query parameters in URL order
    pub entries: Vec<PreviewEntry>,
    /// False while the field text is not a parseable URL
    pub parse_ok: bool,
}

impl PreviewState {
    pub fn new() -> Self {
        Self {
            path: None,
            version: None,
            entries: Vec::new(),
            parse_ok: false,
        }
    }

    /// Recompute the breakdown from the field text and current metadata
    pub fn update(&mut self, url: &str, options: Option<&AutocompleteOptions>) {
        let Some(parsed) = parse_sample_url(url) else {
            self.parse_ok = false;
            self.path = None;
            self.version = None;
            self.entries.clear();
            return;
        };

        self.parse_ok = true;

        // Known-parameter marks only apply when the metadata belongs to
        // the path being typed.
        let metadata = options.filter(|o| o.url == format!("/{}", parsed.request_path));

        self.entries = match &parsed.search {
            Some(search) => query_pairs(search)
                .into_iter()
                .map(|(name, value)| {
                    let known = metadata.map(|o| o.has_parameter(&name));
                    PreviewEntry { name, value, known }
                })
                .collect(),
            None => Vec::new(),
        };

        self.version = parsed.query_version;
        self.path = if parsed.request_path.is_empty() {
            None
        } else {
            Some(parsed.request_path)
        };
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "preview_state_tests.rs"]
mod preview_state_tests;
