//! Browser localStorage persistence for auth credentials.
//!
//! Client-side (hydrate): real localStorage access via `web-sys`.
//! Server-side (SSR): inert stubs, since storage only exists in the browser.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Storage key for the one-time wallet token. Read as a resolver fallback but
/// never written here: the token is single-use and must not outlive its
/// exchange.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Storage key for the durable access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Storage key for the cached user profile; cleared on sign-out.
pub const USER_KEY: &str = "user";

/// Load a string value from localStorage for `key`.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Persist the durable access token.
pub fn save_access_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove `keys` from localStorage.
pub fn clear(keys: &[&str]) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        for key in keys {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = keys;
    }
}
