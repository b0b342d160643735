//! One-time token exchange for a durable access token.

use super::store;
use crate::net::api;

/// Exchange a one-time token for an access token, or fall back to the
/// persisted one when no fresh token arrived this page load.
///
/// Persisting the result stays with the caller; this function only obtains
/// the credential.
///
/// # Errors
///
/// Exchange-API failures propagate unchanged; there is no retry.
pub async fn exchange(one_time: Option<&str>) -> Result<Option<String>, String> {
    match one_time {
        Some(token) => api::get_token(token).await.map(Some),
        None => Ok(store::load(store::ACCESS_TOKEN_KEY)),
    }
}
