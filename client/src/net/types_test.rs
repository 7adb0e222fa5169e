use super::*;

#[test]
fn user_deserializes_minimal_payload() {
    let user: User = serde_json::from_str(r#"{"id":"u1","name":"Alice"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, None);
    assert_eq!(user.auth_method, "session");
}

#[test]
fn user_into_identity_maps_fields() {
    let user = User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: Some("alice@example.com".to_owned()),
        avatar_url: Some("https://example.com/a.png".to_owned()),
        auth_method: "google".to_owned(),
    };

    let identity = Identity::from(user);

    assert_eq!(identity.id, "u1");
    assert_eq!(identity.display_name.as_deref(), Some("Alice"));
    assert_eq!(identity.email.as_deref(), Some("alice@example.com"));
    assert_eq!(identity.avatar_url.as_deref(), Some("https://example.com/a.png"));
}

#[test]
fn blank_name_and_email_become_none() {
    let user: User = serde_json::from_str(r#"{"id":"u1","name":"  ","email":""}"#).unwrap();

    let identity = Identity::from(user);

    assert_eq!(identity.display_name, None);
    assert_eq!(identity.email, None);
    assert_eq!(identity.label(), "u1");
}
