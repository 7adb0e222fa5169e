use super::*;

fn signed_in(identity: Identity) -> Session {
    Session { user: Some(identity), initialized: true, ..Session::default() }
}

// =============================================================
// user_badge
// =============================================================

#[test]
fn user_badge_empty_without_user() {
    assert_eq!(user_badge(&Session::default()), "");
}

#[test]
fn user_badge_uses_identity_label() {
    let session = signed_in(Identity::new("u1").with_display_name("Alice"));
    assert_eq!(user_badge(&session), "Alice");
}

#[test]
fn user_badge_falls_back_to_email() {
    let session = signed_in(Identity::new("u1").with_email("alice@example.com"));
    assert_eq!(user_badge(&session), "alice@example.com");
}

// =============================================================
// error_banner
// =============================================================

#[test]
fn error_banner_none_without_error() {
    assert_eq!(error_banner(&Session::default()), None);
}

#[test]
fn error_banner_formats_message() {
    let session = Session { error: Some("denied".to_owned()), ..Session::default() };
    assert_eq!(error_banner(&session).as_deref(), Some("Authentication problem: denied"));
}

#[test]
fn error_banner_ignores_blank_message() {
    let session = Session { error: Some("  ".to_owned()), ..Session::default() };
    assert_eq!(error_banner(&session), None);
}

// =============================================================
// replace_if_changed
// =============================================================

#[test]
fn replace_if_changed_skips_identical_snapshot() {
    let mut current = signed_in(Identity::new("u1"));
    let next = current.clone();
    assert!(!replace_if_changed(&mut current, next));
}

#[test]
fn replace_if_changed_takes_in_flight_snapshot() {
    let mut current = signed_in(Identity::new("u1"));
    let next = Session { loading: true, ..current.clone() };
    assert!(replace_if_changed(&mut current, next));
    assert!(current.loading);
}
