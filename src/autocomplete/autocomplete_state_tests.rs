//! Tests for AutocompleteState

use super::*;
use proptest::prelude::*;

fn names() -> Vec<String> {
    vec![
        "$select".to_string(),
        "$top".to_string(),
        "$count".to_string(),
    ]
}

// ========== edit_delta Tests ==========

#[test]
fn test_delta_of_appended_text() {
    assert_eq!(edit_delta("https://x/me?", "https://x/me?s"), "s");
}

#[test]
fn test_delta_with_empty_previous_is_whole_text() {
    assert_eq!(edit_delta("", "abc"), "abc");
}

#[test]
fn test_delta_removes_first_occurrence_when_not_a_prefix() {
    // Text inserted before the old content.
    assert_eq!(edit_delta("me?", "xme?"), "x");
}

#[test]
fn test_delta_after_deletion_is_whole_text() {
    assert_eq!(edit_delta("me?se", "me?s"), "me?s");
}

#[test]
fn test_delta_of_unchanged_text_is_empty() {
    assert_eq!(edit_delta("same", "same"), "");
}

#[test]
fn test_delta_when_previous_absent_is_whole_text() {
    assert_eq!(edit_delta("abc", "xyz"), "xyz");
}

// ========== track_edit Tests ==========

#[test]
fn test_first_keystroke_opens_popup_without_accumulating() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());
    state.hide();

    state.track_edit("https://x/me", "https://x/me?");

    assert!(state.is_visible());
    assert_eq!(state.compare(), "");
    assert_eq!(state.filtered().len(), 3);
}

#[test]
fn test_open_popup_accumulates_and_filters() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());

    state.track_edit("https://x/me?", "https://x/me?s");

    assert_eq!(state.compare(), "s");
    assert_eq!(state.filtered(), ["$select"]);
}

#[test]
fn test_fragment_accumulates_across_keystrokes() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());

    state.track_edit("https://x/me?", "https://x/me?s");
    state.track_edit("https://x/me?s", "https://x/me?se");

    assert_eq!(state.compare(), "se");
    assert_eq!(state.filtered(), ["$select"]);
}

#[test]
fn test_filtering_is_case_insensitive() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());

    state.track_edit("https://x/me?", "https://x/me?SEL");

    assert_eq!(state.filtered(), ["$select"]);
}

#[test]
fn test_no_accumulation_with_empty_superset() {
    let mut state = AutocompleteState::new();
    state.track_edit("a", "ab");

    assert!(state.is_visible());
    assert_eq!(state.compare(), "");
}

#[test]
fn test_edit_resets_highlight_to_first_entry() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());
    state.select_next();
    assert_eq!(state.selected_index(), 1);

    state.track_edit("https://x/me?", "https://x/me?t");
    assert_eq!(state.selected_index(), 0);
}

#[test]
fn test_nonmatching_fragment_filters_everything_out() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());

    state.track_edit("https://x/me?", "https://x/me?zzz");

    assert!(state.filtered().is_empty());
    assert_eq!(state.selected(), None);
}

// ========== update_suggestions Tests ==========

#[test]
fn test_update_suggestions_installs_full_filtered_copy() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());

    assert!(state.is_visible());
    assert_eq!(state.suggestions(), state.filtered());
    assert_eq!(state.selected_index(), 0);
}

#[test]
fn test_update_suggestions_discards_stale_fragment() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());
    state.track_edit("https://x/me?", "https://x/me?sel");
    assert_eq!(state.compare(), "sel");

    state.update_suggestions(vec!["id".to_string(), "subject".to_string()]);

    assert_eq!(state.compare(), "");
    assert_eq!(state.filtered().len(), 2);
}

#[test]
fn test_update_suggestions_accepts_empty_list() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(Vec::new());

    assert!(state.is_visible());
    assert!(state.filtered().is_empty());
    assert_eq!(state.selected(), None);
}

// ========== Navigation Tests ==========

#[test]
fn test_select_previous_refuses_at_first_entry() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());

    state.select_previous();
    assert_eq!(state.selected_index(), 0);
}

#[test]
fn test_select_next_moves_down() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());

    state.select_next();
    assert_eq!(state.selected_index(), 1);
}

#[test]
fn test_select_next_clamps_at_last_entry() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());

    for _ in 0..10 {
        state.select_next();
    }
    assert_eq!(state.selected_index(), 2);
}

#[test]
fn test_select_next_with_empty_list_stays_at_zero() {
    let mut state = AutocompleteState::new();
    state.select_next();
    assert_eq!(state.selected_index(), 0);
}

#[test]
fn test_navigation_round_trip() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());

    state.select_next();
    state.select_next();
    state.select_previous();
    assert_eq!(state.selected_index(), 1);
    assert_eq!(state.selected(), Some("$top"));
}

// ========== selected Tests ==========

#[test]
fn test_selected_is_none_when_hidden() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());
    state.hide();

    assert_eq!(state.selected(), None);
}

#[test]
fn test_selected_returns_highlighted_entry() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());

    assert_eq!(state.selected(), Some("$select"));
}

// ========== hide / reset Tests ==========

#[test]
fn test_hide_keeps_lists_and_fragment() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());
    state.track_edit("https://x/me?", "https://x/me?s");

    state.hide();

    assert!(!state.is_visible());
    assert_eq!(state.compare(), "s");
    assert_eq!(state.filtered(), ["$select"]);
}

#[test]
fn test_reset_clears_everything_but_the_superset() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());
    state.track_edit("https://x/me?", "https://x/me?s");
    state.select_next();

    state.reset();

    assert!(!state.is_visible());
    assert!(state.filtered().is_empty());
    assert_eq!(state.compare(), "");
    assert_eq!(state.selected_index(), 0);
    assert_eq!(state.suggestions(), names());
}

// ========== hit_test Tests ==========

#[test]
fn test_hit_test_without_drawn_popup() {
    let state = AutocompleteState::new();
    assert_eq!(state.hit_test(5, 5), None);
}

#[test]
fn test_hit_test_maps_rows_to_filtered_indices() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());
    state.set_popup_area(
        Rect {
            x: 2,
            y: 3,
            width: 20,
            height: 5,
        },
        0,
    );

    assert_eq!(state.hit_test(4, 4), Some(0));
    assert_eq!(state.hit_test(4, 5), Some(1));
    assert_eq!(state.hit_test(4, 6), Some(2));
}

#[test]
fn test_hit_test_rejects_borders_and_outside() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(names());
    let area = Rect {
        x: 2,
        y: 3,
        width: 20,
        height: 5,
    };
    state.set_popup_area(area, 0);

    assert_eq!(state.hit_test(4, 3), None, "top border");
    assert_eq!(state.hit_test(4, 7), None, "bottom border");
    assert_eq!(state.hit_test(2, 4), None, "left border");
    assert_eq!(state.hit_test(21, 4), None, "right border");
    assert_eq!(state.hit_test(40, 40), None, "outside");
}

#[test]
fn test_hit_test_applies_scroll_offset() {
    let mut state = AutocompleteState::new();
    state.update_suggestions((0..6).map(|i| format!("item{i}")).collect());
    state.set_popup_area(
        Rect {
            x: 0,
            y: 0,
            width: 20,
            height: 5,
        },
        2,
    );

    assert_eq!(state.hit_test(1, 1), Some(2));
    assert_eq!(state.hit_test(1, 3), Some(4));
}

#[test]
fn test_hit_test_rejects_rows_past_the_list() {
    let mut state = AutocompleteState::new();
    state.update_suggestions(vec!["only".to_string()]);
    state.set_popup_area(
        Rect {
            x: 0,
            y: 0,
            width: 20,
            height: 6,
        },
        0,
    );

    assert_eq!(state.hit_test(1, 1), Some(0));
    assert_eq!(state.hit_test(1, 2), None);
}

// ========== Property Tests ==========

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn filtered_is_always_a_matching_subset(
        superset in prop::collection::vec("[a-zA-Z$]{1,8}", 0..8),
        typed in "[a-zA-Z]{0,4}",
    ) {
        let mut state = AutocompleteState::new();
        state.update_suggestions(superset.clone());

        let mut text = String::from("https://api.example.com/v1.0/me?");
        for ch in typed.chars() {
            let previous = text.clone();
            text.push(ch);
            state.track_edit(&previous, &text);
        }

        let needle = state.compare().to_lowercase();
        for entry in state.filtered() {
            prop_assert!(superset.contains(entry));
            prop_assert!(entry.to_lowercase().contains(&needle));
        }
        for entry in &superset {
            if !entry.to_lowercase().contains(&needle) {
                prop_assert!(!state.filtered().contains(entry));
            }
        }
    }

    #[test]
    fn highlight_stays_in_bounds_under_navigation(
        len in 0usize..6,
        downs in prop::collection::vec(prop::bool::ANY, 0..12),
    ) {
        let mut state = AutocompleteState::new();
        state.update_suggestions((0..len).map(|i| format!("item{i}")).collect());

        for down in downs {
            if down {
                state.select_next();
            } else {
                state.select_previous();
            }

            if state.filtered().is_empty() {
                prop_assert_eq!(state.selected_index(), 0);
            } else {
                prop_assert!(state.selected_index() < state.filtered().len());
            }
        }
    }

    #[test]
    fn reset_always_restores_accept_invariants(
        superset in prop::collection::vec("[a-z]{1,6}", 0..5),
        typed in "[a-z]{0,3}",
    ) {
        let mut state = AutocompleteState::new();
        state.update_suggestions(superset);

        let mut text = String::from("https://x/y?");
        for ch in typed.chars() {
            let previous = text.clone();
            text.push(ch);
            state.track_edit(&previous, &text);
        }
        state.reset();

        prop_assert!(!state.is_visible());
        prop_assert!(state.filtered().is_empty());
        prop_assert_eq!(state.compare(), "");
    }
}
