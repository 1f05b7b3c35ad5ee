//! Manifest and parameter metadata types
//!
//! The manifest is a JSON file describing the request paths an API serves
//! and, per path, the query parameters it accepts. Parameters with a fixed
//! value set carry an `items` list so values can be suggested too.

use std::path::Path;

use serde::Deserialize;

use crate::error::UrlqError;

/// One query parameter a request path supports
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryParameter {
    /// Parameter name as it appears in the URL, e.g. "$select"
    pub name: String,
    /// Enumerated values, for parameters with a fixed value set
    #[serde(default)]
    pub items: Option<Vec<String>>,
}

/// Autocomplete metadata for one request path
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AutocompleteOptions {
    /// Request path with a leading slash, e.g. "/me/messages"
    pub url: String,
    #[serde(default)]
    pub parameters: Vec<QueryParameter>,
}

impl AutocompleteOptions {
    /// All parameter names in manifest order
    pub fn parameter_names(&self) -> Vec<String> {
        self.parameters.iter().map(|p| p.name.clone()).collect()
    }

    /// Enumerated values for the named parameter.
    ///
    /// None when the parameter is unknown or has no fixed value set.
    pub fn items_for(&self, name: &str) -> Option<&[String]> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.items.as_deref())
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.iter().any(|p| p.name == name)
    }
}

/// Parsed manifest file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// URL the input field is seeded with when --url is not given
    #[serde(default)]
    pub base_url: Option<String>,
    pub resources: Vec<AutocompleteOptions>,
}

impl Manifest {
    /// Parse manifest JSON, mapping serde errors to a readable message
    pub fn from_json(json: &str) -> Result<Self, UrlqError> {
        serde_json::from_str(json).map_err(|e| UrlqError::InvalidManifest(e.to_string()))
    }

    /// Load and parse a manifest file from disk
    pub fn load(path: &Path) -> Result<Self, UrlqError> {
        if !path.exists() {
            return Err(UrlqError::ManifestNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
