//! urlq library
//!
//! Interactive request-URL builder: a terminal UI for composing a URL
//! against a JSON API manifest, with autocomplete for query parameters
//! and their values. The binary in `main.rs` wires this library to a
//! real terminal and prints the composed URL on exit.

pub mod app;
pub mod autocomplete;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod help_line;
pub mod input;
pub mod logging;
pub mod metadata;
pub mod notification;
pub mod preview;
pub mod sample_url;
pub mod widgets;
