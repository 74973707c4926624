//! Transport capability consumed by the request pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pipeline never talks to the network directly. Browser builds plug in a
//! `gloo-net` transport, the CLI plugs in `reqwest`, and tests plug in a
//! scripted fake. All of them speak the request/response shapes below.

use std::fmt;

use futures::future::LocalBoxFuture;
use serde_json::Value;

use crate::registry::CancelSignal;

/// HTTP method subset used by the forum backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    /// Upper-case wire name, e.g. `"GET"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether this is a read request (eligible for dedup and the public-read exception).
    #[must_use]
    pub fn is_read(self) -> bool {
        matches!(self, Self::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully prepared outbound request handed to a [`Transport`].
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    /// Path relative to the API base URL, e.g. `/api/post/42`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
    /// Present for deduplicated reads; fires when a newer identical read supersedes this one.
    pub cancel: Option<CancelSignal>,
}

impl TransportRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None, headers: Vec::new(), cancel: None }
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Look up a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Successful (2xx) transport response.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub payload: Value,
}

/// Transport-level failure: a non-2xx response, a network error, or an abort.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransportError {
    /// HTTP status when the server answered.
    pub status: Option<u16>,
    /// Set when the transport observed cancellation itself.
    pub cancelled: bool,
    /// Transport's own description of the failure.
    pub message: String,
    /// Response body, when the server returned JSON.
    pub body: Option<Value>,
}

impl TransportError {
    /// Build an error for a non-2xx response carrying `payload` as its body.
    #[must_use]
    pub fn from_status(status: u16, payload: Option<Value>) -> Self {
        Self { status: Some(status), cancelled: false, message: format!("request failed with status code {status}"), body: payload }
    }

    /// Top-level `message` string of the body, whatever else the body holds.
    ///
    /// Covers both the `{success, data, message}` envelope and Spring's
    /// default `{timestamp, status, error, message, path}` error body.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        self.body.as_ref()?.get("message")?.as_str()
    }

    /// Build an error for a failure that never produced a response.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self { message: message.into(), ..Self::default() }
    }

    #[must_use]
    pub fn cancelled() -> Self {
        Self { cancelled: true, message: "request cancelled".to_owned(), ..Self::default() }
    }
}

/// Issues HTTP-style requests for the pipeline.
///
/// Futures are `!Send`: the pipeline runs on a single cooperative executor
/// (the browser event loop or a current-thread runtime).
pub trait Transport {
    fn send(&self, request: TransportRequest) -> LocalBoxFuture<'static, Result<TransportResponse, TransportError>>;
}
