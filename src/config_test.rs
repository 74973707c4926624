use super::*;

#[test]
fn missing_or_blank_value_uses_default() {
    assert_eq!(ClientConfig::from_value(None), Ok(ClientConfig::default()));
    assert_eq!(ClientConfig::from_value(Some("   ")), Ok(ClientConfig::default()));
    assert_eq!(ClientConfig::default().base_url, "http://localhost:8080");
}

#[test]
fn trailing_slashes_are_trimmed() {
    let cfg = ClientConfig::from_value(Some("https://forum.example.com//")).expect("valid");
    assert_eq!(cfg.base_url, "https://forum.example.com");
}

#[test]
fn scheme_is_required() {
    assert_eq!(
        ClientConfig::from_value(Some("forum.example.com")),
        Err(ConfigError::InvalidBaseUrl("forum.example.com".to_owned()))
    );
}

#[test]
fn url_for_joins_paths() {
    let cfg = ClientConfig::from_value(Some("http://api:8080/")).expect("valid");
    assert_eq!(cfg.url_for("/api/post"), "http://api:8080/api/post");
    assert_eq!(cfg.url_for("api/post/1"), "http://api:8080/api/post/1");
}
