//! Wire DTOs for the forum REST backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. Every response is wrapped in [`ApiEnvelope`]; list responses
//! additionally wrap a [`Page`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Standard `{success, data, message}` response wrapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    /// Response payload; `null` or absent for endpoints that return nothing.
    pub data: Option<T>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub message: String,
}

impl<T> ApiEnvelope<T> {
    /// Payload of a successful response, or `None` when `success` is false or data is missing.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// Reply of an endpoint that returns nothing meaningful.
///
/// `data` is kept as raw JSON so a backend that echoes something back (an id,
/// the saved entity) still decodes.
pub type Acknowledgement = ApiEnvelope<serde_json::Value>;

/// Credentials submitted to `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token pair returned by a successful login.
///
/// The same pair is what the token store persists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Account details submitted to `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub nickname: String,
    pub password: String,
}

/// A post as shown in the paginated list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    /// Author's username.
    pub username: String,
    /// View count.
    pub view: i64,
}

/// Full post returned by `GET /api/post/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub title: String,
    pub body: String,
    pub view: i64,
    pub username: String,
}

/// Title/body payload for creating or updating a post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

impl From<&PostDetail> for PostDraft {
    fn from(detail: &PostDetail) -> Self {
        Self { title: detail.title.clone(), body: detail.body.clone() }
    }
}

/// Spring-style page wrapper for list endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: u32,
    pub size: u32,
    /// Zero-based index of this page.
    pub number: u32,
    pub first: bool,
    pub last: bool,
}

fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
