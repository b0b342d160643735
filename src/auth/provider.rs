//! Auth context provider: composes resolution, exchange, and reconciliation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthProvider` propagates authentication state through the component tree.
//! It owns the reducer state, runs the bootstrap exactly once per mounted
//! instance, and adopts the external session once local initialization has
//! settled.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use leptos::prelude::*;

use super::guard::InitGuard;
use super::store;
use crate::net::types::User;
use crate::state::auth::{AuthEvent, AuthState, reduce};
use crate::state::session::SessionState;

/// Handle exposed to descendants: observable state plus sign-in/sign-out.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    /// The auth state signal. Read-only by convention: every write goes
    /// through a dispatched [`AuthEvent`].
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    fn dispatch(&self, event: AuthEvent) {
        self.state.update(|state| *state = reduce(state, event));
    }

    /// Adopt `user` as the authenticated identity.
    pub fn sign_in(&self, user: User) {
        self.dispatch(AuthEvent::SignIn(user));
    }

    /// Sign out: drop the cached profile, then confirm with the external
    /// session provider before clearing local state.
    ///
    /// # Errors
    ///
    /// A rejected provider sign-out propagates and leaves auth state
    /// untouched, so the UI keeps reflecting the still-live session.
    pub async fn sign_out(&self) -> Result<(), String> {
        store::clear(&[store::USER_KEY]);
        crate::net::session::sign_out().await?;
        self.dispatch(AuthEvent::SignOut);
        Ok(())
    }
}

/// Whether the external session should be adopted into local state.
///
/// Fires only after initialization has settled, and never once a local user
/// exists, so repeated render passes with the same session stay no-ops.
fn should_adopt_session(auth: &AuthState, session: &SessionState) -> bool {
    !auth.loading && auth.user.is_none() && session.user.is_some()
}

/// One-shot bootstrap: resolve a token, exchange it, establish the external
/// session, and leave the loading state either way.
#[cfg(feature = "hydrate")]
async fn initialize(ctx: AuthContext) {
    if let Err(err) = run_token_flow().await {
        leptos::logging::error!("auth initialization failed: {err}");
    }
    ctx.dispatch(AuthEvent::Initialize);
}

/// Resolve → exchange → external sign-in. Returns `Ok(())` early when no
/// token is present anywhere or this page load is handing off elsewhere.
#[cfg(feature = "hydrate")]
async fn run_token_flow() -> Result<(), String> {
    let Some(one_time) = super::resolve::resolve().await? else {
        return Ok(());
    };
    if let Some(access) = super::exchange::exchange(Some(&one_time)).await? {
        store::save_access_token(&access);
    }
    crate::net::session::sign_in(&one_time).await
}

/// Provides [`AuthContext`] to descendants and drives the bootstrap exactly
/// once per mounted instance, even when the surrounding runtime re-runs the
/// mount effect.
///
/// Expects a `RwSignal<SessionState>` in context (provided by the app root,
/// kept current by the session watcher).
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ctx = AuthContext { state: RwSignal::new(AuthState::default()) };
    let guard = InitGuard::default();

    // Bootstrap on mount; the guard absorbs a doubled invocation. The flag
    // flips before the first await point, so the loser returns immediately.
    Effect::new(move || {
        if !guard.try_acquire() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(initialize(ctx));
    });

    // Adopt the external session once local initialization has settled.
    Effect::new(move || {
        let auth = ctx.state.get();
        let session = session.get();
        if should_adopt_session(&auth, &session) {
            if let Some(user) = session.user {
                ctx.sign_in(user);
            }
        }
    });

    provide_context(ctx);

    view! { {children()} }
}
