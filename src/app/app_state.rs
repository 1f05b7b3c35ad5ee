use url::{Position, Url};

use crate::autocomplete::{AutocompleteState, Trigger, merge, trigger};
use crate::config::Config;
use crate::input::InputState;
use crate::metadata::{MetadataState, MetadataUpdate};
use crate::notification::NotificationState;
use crate::preview::PreviewState;
use crate::sample_url::parse_sample_url;

/// What to output when exiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Url,   // Output the full composed URL (Enter)
    Query, // Output the path-and-query portion only (Ctrl+Q)
}

/// Application state
pub struct App {
    pub input: InputState,
    pub autocomplete: AutocompleteState,
    pub metadata: MetadataState,
    pub preview: PreviewState,
    pub notification: NotificationState,
    pub config: Config,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
    /// Field text before the edit currently being processed, used to
    /// compute the typed delta
    pub last_input: String,
}

impl App {
    /// Create a new App instance seeded with an initial URL
    pub fn new(seed_url: &str, config: &Config) -> Self {
        let mut app = Self {
            input: InputState::new(seed_url),
            autocomplete: AutocompleteState::new(),
            metadata: MetadataState::new(),
            preview: PreviewState::new(),
            notification: NotificationState::new(),
            config: config.clone(),
            output_mode: None,
            should_quit: false,
            last_input: seed_url.to_string(),
        };
        app.refresh_preview();
        app
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the output mode (if set)
    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    /// The composed URL as currently typed
    pub fn url(&self) -> &str {
        self.input.text()
    }

    /// The path-and-query portion of the composed URL, for Ctrl+Q output.
    ///
    /// Falls back to the full field text when it is not a parseable URL.
    pub fn path_and_query(&self) -> String {
        match Url::parse(self.url()) {
            Ok(parsed) => parsed[Position::BeforePath..].to_string(),
            Err(_) => self.url().to_string(),
        }
    }

    /// React to an input edit.
    ///
    /// Runs the edit pipeline in a fixed order: grow the compare fragment
    /// by the typed delta and re-filter, refresh the preview, then run
    /// whichever suggestion flow the last typed character triggers.
    pub fn on_change(&mut self) {
        let current = self.input.text().to_string();
        let previous = std::mem::replace(&mut self.last_input, current.clone());

        self.autocomplete.track_edit(&previous, &current);
        self.refresh_preview();

        match trigger::classify(&current) {
            Trigger::ParameterNames => self.request_parameter_suggestions(&current),
            Trigger::ParameterValues => self.show_value_suggestions(&current),
            Trigger::None => {}
        }
    }

    /// `?` was typed: regenerate suggestions from cached metadata when it
    /// already belongs to this path, otherwise ask the worker to fetch it.
    fn request_parameter_suggestions(&mut self, url: &str) {
        let Some(parsed) = parse_sample_url(url) else {
            return;
        };

        if self.metadata.is_cached(&parsed.request_path) {
            self.show_parameter_names();
        } else {
            self.metadata.request(&parsed.request_path);
        }
    }

    /// Superset and filtered list become the cached parameter names
    pub fn show_parameter_names(&mut self) {
        if let Some(options) = &self.metadata.options {
            self.autocomplete
                .update_suggestions(options.parameter_names());
        }
    }

    /// `=` or `,` was typed: swap the suggestion lists to the enumerated
    /// values of the parameter being typed.
    ///
    /// Unknown parameters and parameters without a fixed value set leave
    /// the lists alone, which shows nothing.
    fn show_value_suggestions(&mut self, url: &str) {
        let Some(options) = &self.metadata.options else {
            return;
        };

        let name = format!("${}", trigger::value_parameter(url));
        if let Some(items) = options.items_for(&name) {
            let items = items.to_vec();
            self.autocomplete.update_suggestions(items);
        }
    }

    /// Accept the highlighted suggestion, if there is one
    pub fn accept_selected(&mut self) {
        if let Some(choice) = self.autocomplete.selected().map(str::to_string) {
            self.accept_suggestion(&choice);
        }
    }

    /// Merge a suggestion into the field text, then close the popup and
    /// reset its accept bookkeeping.
    ///
    /// The superset stays loaded, so reopening on the same path works
    /// without another fetch.
    pub fn accept_suggestion(&mut self, suggestion: &str) {
        let merged =
            merge::merge_suggestion(self.autocomplete.compare(), self.input.text(), suggestion);

        self.input.set_text(&merged);
        self.last_input = merged;
        self.autocomplete.reset();
        self.refresh_preview();
    }

    /// Recompute the preview pane from the field text and loaded metadata
    pub fn refresh_preview(&mut self) {
        self.preview
            .update(self.input.text(), self.metadata.options.as_ref());
    }

    /// Drain worker responses.
    ///
    /// Freshly loaded options regenerate the name suggestions, the same
    /// way a `?` on an already-cached path does. A failed fetch closes the
    /// popup and reports the miss in a notification.
    pub fn poll_metadata(&mut self) {
        match self.metadata.poll() {
            Some(MetadataUpdate::Loaded) => {
                self.show_parameter_names();
                self.refresh_preview();
            }
            Some(MetadataUpdate::Failed(error)) => {
                self.autocomplete.hide();
                self.notification.show(&error);
            }
            None => {}
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
