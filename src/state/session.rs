#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Session state supplied by the external session provider.
///
/// The watcher in `net::session` is the only writer; the auth engine treats
/// this as a read-only input and never mutates `user` itself.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// The provider's authenticated user, once its handshake completes.
    pub user: Option<User>,
    /// True until the first session lookup has settled.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}
