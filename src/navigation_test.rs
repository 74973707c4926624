use super::*;

#[test]
fn login_and_register_views_are_auth_views() {
    assert!(is_auth_view("/login"));
    assert!(is_auth_view("/register"));
    assert!(is_auth_view("/app/login?next=/"));
}

#[test]
fn content_views_are_not_auth_views() {
    assert!(!is_auth_view("/"));
    assert!(!is_auth_view("/posts/42"));
    assert!(!is_auth_view("/posts/edit/42"));
}
