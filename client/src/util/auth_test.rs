use authgate::Identity;

use super::*;

fn guard() -> RefCell<RouteGuard> {
    RefCell::new(RouteGuard::new("/login"))
}

fn session(initialized: bool, loading: bool, user: Option<&str>) -> Session {
    Session { user: user.map(Identity::new), loading, error: None, initialized }
}

#[test]
fn should_not_redirect_while_undecided() {
    assert_eq!(observe(&guard(), &session(false, false, None), "/"), None);
}

#[test]
fn should_not_redirect_while_loading() {
    assert_eq!(observe(&guard(), &session(true, true, None), "/"), None);
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert_eq!(observe(&guard(), &session(true, false, None), "/").as_deref(), Some("/login"));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert_eq!(observe(&guard(), &session(true, false, Some("u1")), "/"), None);
}

#[test]
fn should_redirect_only_once_per_entry() {
    let g = guard();
    let unauth = session(true, false, None);
    assert!(observe(&g, &unauth, "/").is_some());
    assert!(observe(&g, &unauth, "/").is_none());
}

#[test]
fn should_not_redirect_when_already_on_login() {
    assert_eq!(observe(&guard(), &session(true, false, None), "/login"), None);
}

#[test]
fn redirect_replaces_history_entry() {
    assert!(redirect_options().replace);
}
