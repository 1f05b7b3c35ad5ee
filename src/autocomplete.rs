pub mod autocomplete_render;
mod autocomplete_state;
pub mod merge;
pub mod trigger;

pub use autocomplete_state::AutocompleteState;
pub use trigger::Trigger;
