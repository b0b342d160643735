use super::*;

// The keys are part of the storage contract shared with earlier deployments;
// a rename would orphan persisted credentials.
#[test]
fn storage_keys_are_stable() {
    assert_eq!(AUTH_TOKEN_KEY, "authToken");
    assert_eq!(ACCESS_TOKEN_KEY, "accessToken");
    assert_eq!(USER_KEY, "user");
}

#[test]
fn load_without_a_browser_returns_none() {
    assert!(load(ACCESS_TOKEN_KEY).is_none());
}
