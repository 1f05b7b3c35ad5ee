pub mod preview_render;
mod preview_state;

pub use preview_state::{PreviewEntry, PreviewState};
