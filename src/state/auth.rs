//! Reducer-driven auth state machine.
//!
//! DESIGN
//! ======
//! The state is owned by one mounted `AuthProvider` instance and is only ever
//! rewritten through [`reduce`], so every reachable state keeps the
//! `authenticated == user.is_some()` invariant and `loading` moves from
//! `true` to `false` exactly once.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    /// Whether an identity is currently established.
    pub authenticated: bool,
    /// True only before the bootstrap sequence has settled.
    pub loading: bool,
    /// The authenticated user, if any.
    pub user: Option<User>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { authenticated: false, loading: true, user: None }
    }
}

/// Events accepted by the auth state machine.
#[derive(Clone, Debug)]
pub enum AuthEvent {
    /// The one-shot bootstrap sequence settled, successfully or not.
    Initialize,
    /// An identity was established, locally or from the external session.
    SignIn(User),
    /// The current identity was dropped.
    SignOut,
}

/// Pure transition function for the auth state machine.
pub fn reduce(state: &AuthState, event: AuthEvent) -> AuthState {
    match event {
        AuthEvent::Initialize => AuthState { loading: false, ..state.clone() },
        AuthEvent::SignIn(user) => AuthState {
            authenticated: true,
            user: Some(user),
            ..state.clone()
        },
        AuthEvent::SignOut => AuthState {
            authenticated: false,
            user: None,
            ..state.clone()
        },
    }
}
