use super::*;

#[test]
fn greeting_uses_identity_label() {
    let user = Identity::new("u1").with_display_name("Alice");
    assert_eq!(greeting(Some(&user)), "Welcome, Alice");
}

#[test]
fn greeting_falls_back_to_id_without_profile() {
    assert_eq!(greeting(Some(&Identity::new("u9"))), "Welcome, u9");
}

#[test]
fn greeting_without_user_is_plain() {
    assert_eq!(greeting(None), "Welcome");
}
