use super::*;

#[test]
fn user_deserializes_camel_case_payload() {
    let user: User = serde_json::from_str(
        r#"{"id":"u-1","handle":"$moondigger","displayName":"Digger","avatarUrl":"https://cdn/a.png"}"#,
    )
    .expect("user payload");

    assert_eq!(user.id, "u-1");
    assert_eq!(user.handle, "$moondigger");
    assert_eq!(user.display_name.as_deref(), Some("Digger"));
    assert_eq!(user.avatar_url.as_deref(), Some("https://cdn/a.png"));
}

#[test]
fn user_optional_fields_default_to_none() {
    let user: User = serde_json::from_str(r#"{"id":"u-2","handle":"$miner"}"#).expect("user payload");

    assert!(user.display_name.is_none());
    assert!(user.avatar_url.is_none());
}
