use super::*;

#[test]
fn author_may_edit() {
    assert!(may_edit("kim", Some("kim")));
}

#[test]
fn other_users_and_anonymous_may_not_edit() {
    assert!(!may_edit("kim", Some("lee")));
    assert!(!may_edit("kim", None));
}
