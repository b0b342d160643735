use super::*;

#[test]
fn environment_redirect_endpoint_encodes_the_marker() {
    assert_eq!(
        environment_redirect_endpoint("env two"),
        "/api/auth/environment-redirect?state=env%20two"
    );
}

#[test]
fn redirect_lookup_failed_message_formats_status() {
    assert_eq!(redirect_lookup_failed_message(502), "redirect lookup failed: 502");
}

#[test]
fn token_exchange_failed_message_formats_status() {
    assert_eq!(token_exchange_failed_message(401), "token exchange failed: 401");
}
