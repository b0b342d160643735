//! Shared wire DTOs for the auth/session API boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON payloads; serde renames
//! keep the Rust side idiomatic.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated wallet user as carried by session and sign-in payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable user identifier.
    pub id: String,
    /// Wallet handle (e.g. `"$moondigger"`).
    pub handle: String,
    /// Display name, if the wallet profile provides one.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
}
