use super::*;

fn token_with(claims: &serde_json::Value) -> String {
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).expect("claims"));
    format!("eyJhbGciOiJIUzI1NiJ9.{payload}.signature")
}

#[test]
fn reads_sub_claim() {
    let token = token_with(&serde_json::json!({ "sub": "kim", "exp": 1 }));
    assert_eq!(username_from_token(&token), Some("kim".to_owned()));
}

#[test]
fn falls_back_to_username_claim() {
    let token = token_with(&serde_json::json!({ "username": "lee" }));
    assert_eq!(username_from_token(&token), Some("lee".to_owned()));
}

#[test]
fn decodes_non_ascii_subject() {
    let token = token_with(&serde_json::json!({ "sub": "홍길동" }));
    assert_eq!(username_from_token(&token), Some("홍길동".to_owned()));
}

#[test]
fn tolerates_padded_payload() {
    let payload = base64::engine::general_purpose::URL_SAFE.encode(br#"{"sub":"abc"}"#);
    assert!(payload.ends_with('='));
    assert_eq!(username_from_token(&format!("h.{payload}.s")), Some("abc".to_owned()));
}

#[test]
fn rejects_malformed_tokens() {
    assert_eq!(username_from_token(""), None);
    assert_eq!(username_from_token("no-dots"), None);
    assert_eq!(username_from_token("a.!!!.c"), None);
    let not_json = URL_SAFE_NO_PAD.encode(b"not json");
    assert_eq!(username_from_token(&format!("a.{not_json}.c")), None);
}

#[test]
fn missing_claims_yield_none() {
    let token = token_with(&serde_json::json!({ "exp": 1 }));
    assert_eq!(username_from_token(&token), None);
}
