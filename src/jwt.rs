//! Access-token subject extraction.
//!
//! The client only needs the username to decide whether the viewer authored a
//! post. The signature is not verified here; the backend enforces ownership.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

#[derive(Deserialize)]
struct Claims {
    sub: Option<String>,
    username: Option<String>,
}

/// Username carried by `token`: the `sub` claim, else `username`.
///
/// Returns `None` for a missing or malformed token.
#[must_use]
pub fn username_from_token(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let bytes = match URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("access token payload is not base64url: {e}");
            return None;
        }
    };
    let claims: Claims = match serde_json::from_slice(&bytes) {
        Ok(claims) => claims,
        Err(e) => {
            log::warn!("access token payload is not JSON: {e}");
            return None;
        }
    };
    claims.sub.or(claims.username).filter(|name| !name.is_empty())
}
