//! Metadata fetch state
//!
//! Owns the channel handles to the metadata worker plus the most recently
//! loaded options. Each request gets a fresh id; only a response carrying
//! the latest id is installed, anything older is dropped as stale.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::types::AutocompleteOptions;
use super::worker::{MetadataRequest, MetadataResponse};

/// Outcome of draining the worker channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataUpdate {
    /// Fresh options were installed
    Loaded,
    /// The latest request failed
    Failed(String),
}

/// Metadata fetch state
pub struct MetadataState {
    /// Options from the most recent successful fetch
    pub options: Option<AutocompleteOptions>,
    /// Whether a fetch is in flight (drives the input-field marker)
    pub pending: bool,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<MetadataRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<MetadataResponse>>,
    /// Current request ID, incremented for each new request
    /// Used to filter stale responses from superseded requests
    pub request_id: u64,
}

impl MetadataState {
    pub fn new() -> Self {
        Self {
            options: None,
            pending: false,
            request_tx: None,
            response_rx: None,
            request_id: 0,
        }
    }

    /// Wire up the worker channels (kept separate from construction so
    /// tests can run without a worker thread)
    pub fn set_channels(
        &mut self,
        request_tx: Sender<MetadataRequest>,
        response_rx: Receiver<MetadataResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Whether the loaded options belong to this request path
    pub fn is_cached(&self, path: &str) -> bool {
        match &self.options {
            Some(options) => options.url == format!("/{path}"),
            None => false,
        }
    }

    /// Send a fetch request to the worker.
    ///
    /// Returns false when no worker is wired up or the channel is closed.
    pub fn request(&mut self, path: &str) -> bool {
        let Some(tx) = &self.request_tx else {
            return false;
        };

        self.request_id = self.request_id.wrapping_add(1);
        let request = MetadataRequest {
            path: path.to_string(),
            request_id: self.request_id,
        };

        if tx.send(request).is_ok() {
            self.pending = true;
            true
        } else {
            false
        }
    }

    /// Drain worker responses, installing the one for the current request.
    ///
    /// Returns the update the caller should react to, or None when nothing
    /// relevant arrived this tick.
    pub fn poll(&mut self) -> Option<MetadataUpdate> {
        let rx = self.response_rx.as_ref()?;
        let mut update = None;

        loop {
            match rx.try_recv() {
                Ok(MetadataResponse::Loaded {
                    options,
                    request_id,
                }) if request_id == self.request_id => {
                    self.options = Some(options);
                    self.pending = false;
                    update = Some(MetadataUpdate::Loaded);
                }
                Ok(MetadataResponse::Failed { error, request_id })
                    if request_id == self.request_id =>
                {
                    self.pending = false;
                    update = Some(MetadataUpdate::Failed(error));
                }
                Ok(stale) => {
                    log::debug!("dropping stale metadata response: {stale:?}");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        update
    }
}

impl Default for MetadataState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "metadata_state_tests.rs"]
mod metadata_state_tests;
