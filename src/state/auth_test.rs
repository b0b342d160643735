use super::*;
use crate::net::types::User;

fn user(handle: &str) -> User {
    User {
        id: "u-1".to_owned(),
        handle: handle.to_owned(),
        display_name: None,
        avatar_url: None,
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn initial_state_is_loading_and_unauthenticated() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn initialize_clears_loading_and_nothing_else() {
    let state = reduce(&AuthState::default(), AuthEvent::Initialize);
    assert!(!state.loading);
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn initialize_preserves_an_established_user() {
    let signed_in = reduce(&AuthState::default(), AuthEvent::SignIn(user("$a")));
    let state = reduce(&signed_in, AuthEvent::Initialize);
    assert!(!state.loading);
    assert!(state.authenticated);
    assert_eq!(state.user.as_ref().map(|u| u.handle.as_str()), Some("$a"));
}

#[test]
fn sign_in_sets_user_without_touching_loading() {
    let state = reduce(&AuthState::default(), AuthEvent::SignIn(user("$a")));
    assert!(state.authenticated);
    assert!(state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.handle.as_str()), Some("$a"));
}

#[test]
fn sign_out_clears_user_and_flag() {
    let signed_in = reduce(&AuthState::default(), AuthEvent::SignIn(user("$a")));
    let state = reduce(&signed_in, AuthEvent::SignOut);
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn sign_in_replaces_previous_user() {
    let first = reduce(&AuthState::default(), AuthEvent::SignIn(user("$a")));
    let state = reduce(&first, AuthEvent::SignIn(user("$b")));
    assert_eq!(state.user.as_ref().map(|u| u.handle.as_str()), Some("$b"));
}

// =============================================================
// Invariants over event sequences
// =============================================================

#[test]
fn authenticated_always_tracks_user_presence() {
    let events = [
        AuthEvent::SignIn(user("$a")),
        AuthEvent::Initialize,
        AuthEvent::SignOut,
        AuthEvent::SignIn(user("$b")),
        AuthEvent::SignOut,
        AuthEvent::Initialize,
    ];

    let mut state = AuthState::default();
    for event in events {
        state = reduce(&state, event);
        assert_eq!(state.authenticated, state.user.is_some());
    }
}

#[test]
fn loading_never_reverts_after_initialize() {
    let mut state = reduce(&AuthState::default(), AuthEvent::Initialize);
    for event in [AuthEvent::SignIn(user("$a")), AuthEvent::SignOut, AuthEvent::Initialize] {
        state = reduce(&state, event);
        assert!(!state.loading);
    }
}
