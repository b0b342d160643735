//! One-time token resolution from the current URL and storage.
//!
//! DESIGN
//! ======
//! Query parsing, token precedence, and URL shaping are pure functions so the
//! protocol is testable natively; only the thin [`resolve`] wrapper touches
//! `web-sys`.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

#[cfg(feature = "hydrate")]
use super::store;

/// Auth-relevant parameters extracted from a `location.search` string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthQuery {
    /// One-time wallet token, if the URL carried one.
    pub auth_token: Option<String>,
    /// Environment marker for cross-deployment hand-off, if present.
    pub state: Option<String>,
}

impl AuthQuery {
    /// Parse a raw query string; a leading `?` is tolerated and values are
    /// percent-decoded. Empty values count as absent.
    pub fn parse(search: &str) -> Self {
        let mut query = Self::default();
        for pair in search.trim_start_matches('?').split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            let raw = parts.next().unwrap_or_default();
            let value = urlencoding::decode(raw)
                .map(std::borrow::Cow::into_owned)
                .unwrap_or_else(|_| raw.to_owned());
            if value.is_empty() {
                continue;
            }
            match key {
                "authToken" => query.auth_token = Some(value),
                "state" => query.state = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// Token precedence: the URL token wins over the stored fallback.
pub fn select_token(query_token: Option<String>, stored: Option<String>) -> Option<String> {
    query_token.or(stored)
}

/// Hand-off URL forwarding an in-flight token to another deployment.
///
/// The `<base>/?authToken=<token>` shape is load-bearing: the target
/// environment's resolver looks for exactly this parameter, so it is emitted
/// (empty if need be) even when no token was in hand.
pub fn handoff_url(base: &str, token: Option<&str>) -> String {
    format!("{base}/?authToken={}", token.unwrap_or_default())
}

/// Remaining query string after dropping the consumed auth parameters.
///
/// Returns `None` when nothing else was present, letting the caller rewrite
/// to the bare path.
pub fn stripped_query(search: &str) -> Option<String> {
    let rest: Vec<&str> = search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| {
            let key = pair.splitn(2, '=').next().unwrap_or_default();
            !pair.is_empty() && key != "authToken" && key != "state"
        })
        .collect();
    if rest.is_empty() { None } else { Some(rest.join("&")) }
}

/// Resolve a one-time token for this page load.
///
/// Reads `authToken` and `state` from the current URL. A `state` marker that
/// maps to another deployment turns this page load into a pass-through: the
/// browser navigates there with the token and `Ok(None)` is returned. With no
/// hand-off, the URL token (falling back to the stored one) is returned and
/// the consumed query parameters are stripped from the address bar without
/// adding a history entry.
///
/// # Errors
///
/// Redirect-lookup failures propagate so the initialization guard can log
/// them and still complete initialization.
pub async fn resolve() -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let search = current_search();
        let query = AuthQuery::parse(&search);
        let token = select_token(query.auth_token, store::load(store::AUTH_TOKEN_KEY));

        if let Some(state) = query.state.as_deref() {
            if let Some(base) = crate::net::api::get_environment_redirect(state).await? {
                navigate_to(&handoff_url(&base, token.as_deref()));
                return Ok(None);
            }
        }

        if token.is_some() {
            strip_consumed_params(&search);
        }

        Ok(token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

#[cfg(feature = "hydrate")]
fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[cfg(feature = "hydrate")]
fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

/// Rewrite the current URL without the consumed parameters, replacing the
/// history entry rather than pushing a new one.
#[cfg(feature = "hydrate")]
fn strip_consumed_params(search: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_else(|_| "/".to_owned());
    let url = match stripped_query(search) {
        Some(rest) => format!("{path}?{rest}"),
        None => path,
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
    }
}
