//! Metadata lookup backends
//!
//! The worker thread resolves request paths through a `MetadataSource`.
//! The only production backend serves entries out of the JSON manifest
//! given on the command line; tests substitute their own implementations.

use super::types::{AutocompleteOptions, Manifest};

/// Resolves autocomplete metadata for a request path
pub trait MetadataSource {
    /// Look up metadata for a request path (no leading slash).
    ///
    /// The error string is shown to the user in a notification.
    fn fetch(&self, path: &str) -> Result<AutocompleteOptions, String>;
}

/// Serves metadata from a parsed manifest file
pub struct ManifestSource {
    manifest: Manifest,
}

impl ManifestSource {
    pub fn new(manifest: Manifest) -> Self {
        Self { manifest }
    }
}

impl MetadataSource for ManifestSource {
    fn fetch(&self, path: &str) -> Result<AutocompleteOptions, String> {
        let wanted = format!("/{path}");
        self.manifest
            .resources
            .iter()
            .find(|entry| entry.url == wanted)
            .cloned()
            .ok_or_else(|| format!("no metadata for {wanted}"))
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
