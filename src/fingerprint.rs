//! Request identity keys for read deduplication.
//!
//! Two reads with the same method, path, and query parameters (in any order)
//! share a fingerprint. The key is a structured serialization, not a hash:
//! JSON quoting keeps values containing `&`, `=`, or `:` unambiguous.

#[cfg(test)]
#[path = "fingerprint_test.rs"]
mod fingerprint_test;

use std::fmt;

use crate::transport::Method;

/// Deterministic identity key for a read request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the fingerprint for `(method, path, query)`.
#[must_use]
pub fn fingerprint<K, V>(method: Method, path: &str, query: &[(K, V)]) -> Fingerprint
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(&str, &str)> = query.iter().map(|(k, v)| (k.as_ref(), v.as_ref())).collect();
    pairs.sort_unstable();
    let params = if pairs.is_empty() {
        String::new()
    } else {
        // Serializing a slice of string pairs cannot fail.
        serde_json::to_string(&pairs).unwrap_or_default()
    };
    Fingerprint(format!("{method}:{path}:{params}"))
}
