use super::*;

fn other(message: &str) -> ApiError {
    ApiError::Other { status: Some(500), message: message.to_owned() }
}

// =============================================================
// present_error
// =============================================================

#[test]
fn cancelled_is_silent() {
    assert_eq!(present_error(&ApiError::Cancelled, false), None);
    assert_eq!(present_error(&ApiError::Cancelled, true), None);
}

#[test]
fn forbidden_public_read_is_silent() {
    let err = ApiError::Forbidden { message: "Forbidden".to_owned() };
    assert_eq!(present_error(&err, true), None);
}

#[test]
fn forbidden_mutation_is_shown() {
    let err = ApiError::Forbidden { message: "Forbidden".to_owned() };
    assert_eq!(present_error(&err, false).as_deref(), Some("Forbidden"));
}

#[test]
fn not_found_uses_missing_post_wording() {
    let err = ApiError::NotFound { message: "post 9 does not exist".to_owned() };
    assert_eq!(present_error(&err, true).as_deref(), Some(MISSING_POST_MESSAGE));
}

#[test]
fn backend_missing_marker_uses_missing_post_wording() {
    assert_eq!(present_error(&other("게시글을 찾을 수 없습니다."), false).as_deref(), Some(MISSING_POST_MESSAGE));
}

#[test]
fn backend_permission_marker_uses_author_wording() {
    assert_eq!(present_error(&other("작성자만 수정할 수 있습니다."), false).as_deref(), Some(AUTHOR_ONLY_MESSAGE));
}

#[test]
fn other_errors_pass_message_through() {
    assert_eq!(present_error(&other("boom"), false).as_deref(), Some("boom"));
}

// =============================================================
// Extension noise
// =============================================================

#[test]
fn extension_noise_markers_match() {
    assert!(is_extension_noise(
        "Uncaught (in promise) Error: A listener indicated an asynchronous response by returning true"
    ));
    assert!(is_extension_noise("Extension context invalidated."));
    assert!(is_extension_noise("The message channel closed before a response was received."));
}

#[test]
fn ordinary_errors_are_not_noise() {
    assert!(!is_extension_noise("TypeError: x is undefined"));
    assert!(!is_extension_noise(""));
}
