//! REST API helpers for the application's auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth failures
//! degrade to "not authenticated" without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
fn environment_redirect_endpoint(state: &str) -> String {
    format!("/api/auth/environment-redirect?state={}", urlencoding::encode(state))
}

#[cfg(any(test, feature = "hydrate"))]
fn redirect_lookup_failed_message(status: u16) -> String {
    format!("redirect lookup failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn token_exchange_failed_message(status: u16) -> String {
    format!("token exchange failed: {status}")
}

/// Resolve an environment-redirect marker to another deployment's base URL.
///
/// Returns `Ok(None)` when the marker maps to no redirect, in which case the
/// caller continues locally.
///
/// # Errors
///
/// Returns an error string if the lookup request itself fails.
pub async fn get_environment_redirect(state: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct RedirectResponse {
            #[serde(default)]
            redirect: Option<String>,
        }
        let resp = gloo_net::http::Request::get(&environment_redirect_endpoint(state))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(redirect_lookup_failed_message(resp.status()));
        }
        let body: RedirectResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.redirect.filter(|base| !base.is_empty()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
        Ok(None)
    }
}

/// Exchange a one-time wallet token for a durable access token via
/// `POST /api/auth/token`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn get_token(auth_token: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct TokenResponse {
            access_token: String,
        }
        let payload = serde_json::json!({ "authToken": auth_token });
        let resp = gloo_net::http::Request::post("/api/auth/token")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(token_exchange_failed_message(resp.status()));
        }
        let body: TokenResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth_token;
        Err("not available on server".to_owned())
    }
}

/// Fetch the wallet-connect destination for the landing hero.
/// Returns `None` when unset or on failure.
pub async fn get_redirection_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct RedirectionUrlResponse {
            #[serde(default)]
            url: Option<String>,
        }
        let resp = gloo_net::http::Request::get("/api/redirection-url")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body: RedirectionUrlResponse = resp.json().await.ok()?;
        body.url.filter(|url| !url.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
