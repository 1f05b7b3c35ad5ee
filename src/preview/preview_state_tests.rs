//! Tests for the request preview state

use super::*;
use crate::metadata::QueryParameter;

fn messages_options() -> AutocompleteOptions {
    AutocompleteOptions {
        url: "/me/messages".to_string(),
        parameters: vec![
            QueryParameter {
                name: "$select".to_string(),
                items: Some(vec!["id".to_string(), "subject".to_string()]),
            },
            QueryParameter {
                name: "$top".to_string(),
                items: None,
            },
        ],
    }
}

#[test]
fn test_update_without_metadata_leaves_known_unset() {
    let mut preview = PreviewState::new();
    preview.update("https://x/v1.0/me/messages?$select=id", None);

    assert!(preview.parse_ok);
    assert_eq!(preview.path.as_deref(), Some("me/messages"));
    assert_eq!(preview.version.as_deref(), Some("v1.0"));
    assert_eq!(preview.entries.len(), 1);
    assert_eq!(preview.entries[0].name, "$select");
    assert_eq!(preview.entries[0].value.as_deref(), Some("id"));
    assert_eq!(preview.entries[0].known, None);
}

#[test]
fn test_update_marks_parameters_against_metadata() {
    let mut preview = PreviewState::new();
    preview.update(
        "https://x/v1.0/me/messages?$select=id&$orderby=date",
        Some(&messages_options()),
    );

    assert_eq!(preview.entries[0].known, Some(true));
    assert_eq!(preview.entries[1].name, "$orderby");
    assert_eq!(preview.entries[1].known, Some(false));
}

#[test]
fn test_metadata_for_another_path_is_ignored() {
    let mut preview = PreviewState::new();
    preview.update("https://x/v1.0/users?$select=id", Some(&messages_options()));

    assert_eq!(preview.entries[0].known, None);
}

#[test]
fn test_unparseable_text_clears_the_breakdown() {
    let mut preview = PreviewState::new();
    preview.update("https://x/v1.0/me?$top=3", None);
    assert!(preview.parse_ok);

    preview.update("not a url", None);

    assert!(!preview.parse_ok);
    assert_eq!(preview.path, None);
    assert_eq!(preview.version, None);
    assert!(preview.entries.is_empty());
}

#[test]
fn test_url_without_query_has_no_entries() {
    let mut preview = PreviewState::new();
    preview.update("https://x/v1.0/me", None);

    assert!(preview.parse_ok);
    assert!(preview.entries.is_empty());
}

#[test]
fn test_parameter_without_value() {
    let mut preview = PreviewState::new();
    preview.update("https://x/v1.0/me?$count", None);

    assert_eq!(preview.entries[0].name, "$count");
    assert_eq!(preview.entries[0].value, None);
}
