use super::*;

#[test]
fn config_from_defaults_when_unset() {
    assert_eq!(config_from(None).base_url, "http://localhost:8080");
}

#[test]
fn config_from_uses_valid_value() {
    assert_eq!(config_from(Some("https://forum.example.com/")).base_url, "https://forum.example.com");
}

#[test]
fn config_from_falls_back_on_invalid_value() {
    assert_eq!(config_from(Some("ftp://nope")), ClientConfig::default());
}

#[test]
fn client_starts_with_no_reads_in_flight() {
    assert_eq!(client().in_flight(), 0);
}

#[test]
fn native_client_starts_logged_out() {
    assert!(forum_api::token_store::load_credentials(client().token_store()).is_none());
}
