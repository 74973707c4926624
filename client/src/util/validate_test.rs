use super::*;

// =============================================================
// Login
// =============================================================

#[test]
fn login_requires_both_fields() {
    let errors = validate_login("", "");
    assert!(errors.contains_key("username"));
    assert!(errors.contains_key("password"));
    assert!(validate_login("kim", "pw").is_empty());
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_accepts_well_formed_input() {
    assert!(validate_register("kim", "kim@example.com", "kimmy", "pw").is_empty());
}

#[test]
fn register_limits_nickname_in_chars() {
    let fifteen = "가".repeat(15);
    assert!(validate_register("kim", "kim@example.com", &fifteen, "pw").is_empty());

    let sixteen = "가".repeat(16);
    let errors = validate_register("kim", "kim@example.com", &sixteen, "pw");
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("nickname"));
}

#[test]
fn register_limits_username_length() {
    let long = "a".repeat(101);
    assert!(validate_register(&long, "kim@example.com", "n", "pw").contains_key("username"));
}

#[test]
fn register_rejects_malformed_email() {
    let errors = validate_register("kim", "not-an-email", "n", "pw");
    assert!(errors.contains_key("email"));
}

#[test]
fn email_shape_checks() {
    assert!(is_email_shaped("a@b.co"));
    assert!(!is_email_shaped("a@b"));
    assert!(!is_email_shaped("@b.co"));
    assert!(!is_email_shaped("a@.co"));
    assert!(!is_email_shaped("a@b.co "));
    assert!(!is_email_shaped("a@b@c.co"));
}

// =============================================================
// Post
// =============================================================

#[test]
fn post_requires_title_and_body() {
    let errors = validate_post("", "");
    assert_eq!(errors.get("title"), Some(&"Enter a title."));
    assert_eq!(errors.get("body"), Some(&"Enter some content."));
}

#[test]
fn post_title_boundary_is_inclusive() {
    let at_limit = "t".repeat(TITLE_MAX_CHARS);
    assert!(validate_post(&at_limit, "body").is_empty());

    let over = "t".repeat(TITLE_MAX_CHARS + 1);
    assert!(validate_post(&over, "body").contains_key("title"));
}

#[test]
fn post_body_counts_chars_not_bytes() {
    let body = "한".repeat(BODY_MAX_CHARS);
    assert!(validate_post("title", &body).is_empty());
}

// =============================================================
// Route ids
// =============================================================

#[test]
fn parse_post_id_accepts_positive_integers_only() {
    assert_eq!(parse_post_id("42"), Some(42));
    assert_eq!(parse_post_id(" 7 "), Some(7));
    assert_eq!(parse_post_id("0"), None);
    assert_eq!(parse_post_id("-3"), None);
    assert_eq!(parse_post_id("abc"), None);
}
