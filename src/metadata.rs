pub mod metadata_state;
pub mod source;
pub mod types;
pub mod worker;

// Re-export public types
pub use metadata_state::{MetadataState, MetadataUpdate};
pub use source::{ManifestSource, MetadataSource};
pub use types::{AutocompleteOptions, Manifest, QueryParameter};
pub use worker::spawn_worker;
