//! External session provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session provider performs its own handshake and persistence; this
//! module only observes the result and forwards sign-in/sign-out calls. The
//! watcher keeps a `SessionState` signal current so the auth reconciler can
//! adopt a session that resolves after local initialization.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::{GetUntracked, Set};

use crate::net::types::User;
use crate::state::session::SessionState;

/// How often the watcher re-reads the session endpoint. Coarse on purpose:
/// the common case is a session resolving once shortly after load.
#[cfg(feature = "hydrate")]
const SESSION_POLL_MS: u64 = 30_000;

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    format!("sign-in failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_out_failed_message(status: u16) -> String {
    format!("sign-out failed: {status}")
}

/// Whether a freshly fetched session result should be published to the
/// signal. The first fetch always publishes (it settles `loading`);
/// afterwards only an actual change does, keeping render churn down.
#[cfg(any(test, feature = "hydrate"))]
fn should_publish(current: &SessionState, fetched: &Option<User>) -> bool {
    current.loading || current.user != *fetched
}

/// Fetch the current session's user from `GET /api/auth/session`.
/// Returns `None` if no session exists, on failure, or on the server.
pub async fn fetch_session_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct SessionResponse {
            #[serde(default)]
            user: Option<User>,
        }
        let resp = gloo_net::http::Request::get("/api/auth/session")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionResponse>().await.ok()?.user
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Establish an external session from a one-time wallet token via the
/// provider's credentials flow (`redirect: false`; the token rides in the
/// body).
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the provider rejects
/// the token.
pub async fn sign_in(handcash_token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "handcashtoken": handcash_token, "redirect": false });
        let resp = gloo_net::http::Request::post("/api/auth/signin/credentials")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_in_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = handcash_token;
        Err("not available on server".to_owned())
    }
}

/// End the external session via `POST /api/auth/signout`.
///
/// # Errors
///
/// Rejections propagate; callers must not clear local auth state when this
/// fails, or local state would misrepresent a still-live session.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/signout")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_out_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Keep `session` current: resolve once immediately, then poll at a coarse
/// interval so a session established later (or in another tab) is eventually
/// observed.
pub fn spawn_session_watcher(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        loop {
            let fetched = fetch_session_user().await;
            let current = session.get_untracked();
            if should_publish(&current, &fetched) {
                session.set(SessionState { user: fetched, loading: false });
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(SESSION_POLL_MS)).await;
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
