//! Suggestion merge routine
//!
//! Reconciles an accepted suggestion with the field text: the compare
//! fragment the user typed while filtering is replaced by the suggestion,
//! so `...?sel` plus `$select` becomes `...?$select`.

/// Merge `selected` into `input`.
///
/// The last occurrence of the compare fragment is replaced by the
/// suggestion; with no fragment, or a fragment no longer present in the
/// text, the suggestion is appended.
pub fn merge_suggestion(compare: &str, input: &str, selected: &str) -> String {
    if compare.is_empty() {
        return format!("{input}{selected}");
    }

    match input.rfind(compare) {
        Some(pos) => {
            let mut merged = String::with_capacity(input.len() + selected.len());
            merged.push_str(&input[..pos]);
            merged.push_str(selected);
            merged.push_str(&input[pos + compare.len()..]);
            merged
        }
        None => format!("{input}{selected}"),
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod merge_tests;
