use thiserror::Error;

/// Custom error types for urlq
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlqError {
    #[error("Manifest not found: {0}\n\nPass the path to a JSON manifest describing your API paths.")]
    ManifestNotFound(String),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for UrlqError {
    fn from(err: std::io::Error) -> Self {
        UrlqError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
