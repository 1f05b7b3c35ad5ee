use std::time::{Duration, Instant};

/// How long a notification stays on screen
const NOTIFICATION_TTL: Duration = Duration::from_millis(2500);

/// Transient message shown in the bottom-right corner
pub struct NotificationState {
    message: Option<String>,
    shown_at: Option<Instant>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            message: None,
            shown_at: None,
        }
    }

    /// Show a message, restarting the display timer
    pub fn show(&mut self, message: &str) {
        self.message = Some(message.to_string());
        self.shown_at = Some(Instant::now());
    }

    /// Current message, expiring it when its display time is up
    pub fn current(&mut self) -> Option<&str> {
        if let Some(shown_at) = self.shown_at {
            if shown_at.elapsed() >= NOTIFICATION_TTL {
                self.message = None;
                self.shown_at = None;
            }
        }
        self.message.as_deref()
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
