use super::*;

// =============================================================
// Query parsing
// =============================================================

#[test]
fn parse_reads_auth_token_and_state() {
    let query = AuthQuery::parse("?authToken=tok-1&state=prod");
    assert_eq!(query.auth_token.as_deref(), Some("tok-1"));
    assert_eq!(query.state.as_deref(), Some("prod"));
}

#[test]
fn parse_works_without_leading_question_mark() {
    let query = AuthQuery::parse("authToken=tok-1");
    assert_eq!(query.auth_token.as_deref(), Some("tok-1"));
    assert!(query.state.is_none());
}

#[test]
fn parse_decodes_percent_encoded_values() {
    let query = AuthQuery::parse("?authToken=a%2Bb%3D&state=env%20two");
    assert_eq!(query.auth_token.as_deref(), Some("a+b="));
    assert_eq!(query.state.as_deref(), Some("env two"));
}

#[test]
fn parse_treats_empty_values_as_absent() {
    let query = AuthQuery::parse("?authToken=&state=");
    assert!(query.auth_token.is_none());
    assert!(query.state.is_none());
}

#[test]
fn parse_ignores_unrelated_parameters() {
    let query = AuthQuery::parse("?utm_source=mail&authToken=tok-1");
    assert_eq!(query.auth_token.as_deref(), Some("tok-1"));
}

#[test]
fn parse_empty_search_is_empty() {
    assert_eq!(AuthQuery::parse(""), AuthQuery::default());
}

// =============================================================
// Token precedence
// =============================================================

#[test]
fn select_token_prefers_query_over_stored() {
    let token = select_token(Some("fresh".to_owned()), Some("stale".to_owned()));
    assert_eq!(token.as_deref(), Some("fresh"));
}

#[test]
fn select_token_falls_back_to_stored() {
    let token = select_token(None, Some("stale".to_owned()));
    assert_eq!(token.as_deref(), Some("stale"));
}

#[test]
fn select_token_none_when_both_missing() {
    assert!(select_token(None, None).is_none());
}

// =============================================================
// Hand-off URL shape
// =============================================================

#[test]
fn handoff_url_preserves_wire_shape() {
    assert_eq!(
        handoff_url("https://staging.example.com", Some("tok-1")),
        "https://staging.example.com/?authToken=tok-1"
    );
}

#[test]
fn handoff_url_keeps_param_when_token_missing() {
    assert_eq!(
        handoff_url("https://staging.example.com", None),
        "https://staging.example.com/?authToken="
    );
}

// =============================================================
// Query stripping
// =============================================================

#[test]
fn stripped_query_drops_consumed_params_only() {
    assert_eq!(
        stripped_query("?authToken=tok-1&ref=mail&state=prod").as_deref(),
        Some("ref=mail")
    );
}

#[test]
fn stripped_query_none_when_only_consumed_params() {
    assert!(stripped_query("?authToken=tok-1&state=prod").is_none());
}

#[test]
fn stripped_query_none_for_empty_search() {
    assert!(stripped_query("").is_none());
}
