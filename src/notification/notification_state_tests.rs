//! Tests for notification state

use super::*;

#[test]
fn test_new_state_has_no_message() {
    let mut state = NotificationState::new();
    assert_eq!(state.current(), None);
}

#[test]
fn test_show_makes_message_current() {
    let mut state = NotificationState::new();
    state.show("URL copied!");
    assert_eq!(state.current(), Some("URL copied!"));
}

#[test]
fn test_show_replaces_previous_message() {
    let mut state = NotificationState::new();
    state.show("first");
    state.show("second");
    assert_eq!(state.current(), Some("second"));
}

#[test]
fn test_message_expires_after_ttl() {
    let mut state = NotificationState::new();
    state.show("short lived");
    state.shown_at = Some(Instant::now() - NOTIFICATION_TTL);

    assert_eq!(state.current(), None);
    assert_eq!(state.current(), None, "stays expired");
}

#[test]
fn test_message_survives_before_ttl() {
    let mut state = NotificationState::new();
    state.show("still here");
    state.shown_at = Some(Instant::now() - NOTIFICATION_TTL / 2);

    assert_eq!(state.current(), Some("still here"));
}
