//! Trigger classification for autocomplete
//!
//! The controller reacts to the last character of the field text: `?`
//! starts the parameter-name flow, `=` and `,` start or continue the
//! value flow for the parameter being typed.

/// What the last typed character asks the controller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// `?` - fetch metadata or regenerate parameter-name suggestions
    ParameterNames,
    /// `=` or `,` - swap in enumerated values for the current parameter
    ParameterValues,
    /// Anything else
    None,
}

/// Classify the autocomplete trigger for the current field text
pub fn classify(url: &str) -> Trigger {
    match url.chars().last() {
        Some('?') => Trigger::ParameterNames,
        Some('=') | Some(',') => Trigger::ParameterValues,
        _ => Trigger::None,
    }
}

/// Name of the parameter whose value list is being typed: the text after
/// the last `$` and before the following `=`, without the sigil.
///
/// When no `$` is present the whole text is taken; the metadata lookup
/// then simply misses and the caller shows nothing.
pub fn value_parameter(url: &str) -> &str {
    let tail = url.rsplit('$').next().unwrap_or(url);
    tail.split('=').next().unwrap_or(tail)
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod trigger_tests;
