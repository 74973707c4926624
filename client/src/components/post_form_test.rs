use super::*;

#[test]
fn submit_label_tracks_mode_and_progress() {
    assert_eq!(submit_label(false, false), "Publish");
    assert_eq!(submit_label(true, false), "Update");
    assert_eq!(submit_label(true, true), "Saving...");
    assert_eq!(submit_label(false, true), "Saving...");
}

#[test]
fn success_message_tracks_mode() {
    assert_eq!(success_message(false), "Post published.");
    assert_eq!(success_message(true), "Post updated.");
}
