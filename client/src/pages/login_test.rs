use authgate::Identity;

use super::*;

fn session(initialized: bool, loading: bool, user: Option<&str>) -> Session {
    Session { user: user.map(Identity::new), loading, error: None, initialized }
}

#[test]
fn should_leave_login_once_authenticated() {
    assert!(should_leave_login(&session(true, false, Some("u1"))));
}

#[test]
fn should_stay_on_login_while_undecided_or_loading() {
    assert!(!should_leave_login(&session(false, false, None)));
    assert!(!should_leave_login(&session(true, true, Some("u1"))));
}

#[test]
fn should_stay_on_login_without_user() {
    assert!(!should_leave_login(&session(true, false, None)));
}

#[test]
fn sign_in_label_reflects_loading() {
    assert_eq!(sign_in_label(Provider::Google, false), "Sign in with Google");
    assert_eq!(sign_in_label(Provider::Google, true), "Signing in...");
}

#[test]
fn sign_in_caption_names_provider() {
    assert_eq!(sign_in_caption(Provider::GitHub), "Continue with your GitHub account.");
}

#[test]
fn sign_in_blocked_until_initialized_and_idle() {
    assert!(sign_in_blocked(&session(false, false, None)));
    assert!(sign_in_blocked(&session(true, true, None)));
    assert!(!sign_in_blocked(&session(true, false, None)));
}
