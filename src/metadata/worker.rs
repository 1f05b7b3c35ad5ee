//! Metadata worker thread
//!
//! Metadata lookups run in a background thread so the UI never blocks on a
//! source. Requests arrive on a channel, responses go back on another, and
//! every message carries the request id it belongs to so the UI can drop
//! responses that a newer request has superseded.

use std::sync::mpsc::{Receiver, Sender};

use super::source::MetadataSource;
use super::types::AutocompleteOptions;

/// Request messages sent to the metadata worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRequest {
    /// Request path to resolve (no leading slash)
    pub path: String,
    /// Unique ID for this request, used to filter stale responses
    pub request_id: u64,
}

/// Response messages received from the metadata worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataResponse {
    /// The source resolved the path
    Loaded {
        options: AutocompleteOptions,
        /// Request ID this result belongs to
        request_id: u64,
    },
    /// The source had nothing for the path
    Failed {
        error: String,
        /// Request ID this failure belongs to
        request_id: u64,
    },
}

/// Spawn the metadata worker thread.
///
/// The thread runs until the request channel is closed, which happens
/// when the main thread drops its sender on exit.
pub fn spawn_worker(
    source: Box<dyn MetadataSource + Send>,
    request_rx: Receiver<MetadataRequest>,
    response_tx: Sender<MetadataResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(source, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    source: Box<dyn MetadataSource + Send>,
    request_rx: Receiver<MetadataRequest>,
    response_tx: Sender<MetadataResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        log::debug!(
            "metadata worker: resolving '{}' (request {})",
            request.path,
            request.request_id
        );

        let response = match source.fetch(&request.path) {
            Ok(options) => MetadataResponse::Loaded {
                options,
                request_id: request.request_id,
            },
            Err(error) => MetadataResponse::Failed {
                error,
                request_id: request.request_id,
            },
        };

        if response_tx.send(response).is_err() {
            // Main thread is gone
            break;
        }
    }

    log::debug!("metadata worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
