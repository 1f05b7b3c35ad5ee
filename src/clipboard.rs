//! Clipboard support
//!
//! Copying goes through a configurable backend: the OS clipboard via
//! arboard, OSC 52 escape sequences for terminals over SSH, or automatic
//! fallback from one to the other.

mod backend;
mod clipboard_events;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
pub use clipboard_events::handle_clipboard_key;
