//! Normalized request outcomes.
//!
//! ERROR HANDLING
//! ==============
//! Every failed call is classified by transport status first. The backend
//! only ships free-text messages (Korean or English), so the message
//! predicates at the bottom exist for UI wording only and never drive the
//! pipeline's own decisions.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::transport::TransportError;

/// Shown when neither the backend nor the transport supplied a message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing the request.";

const MISSING_RESOURCE_MARKERS: &[&str] = &["없", "찾을 수", "not found", "does not exist"];
const PERMISSION_MARKERS: &[&str] = &["권한", "작성자", "permission", "not the author"];

/// Classified failure of a pipeline call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Superseded by a newer identical read. Never shown to the user.
    #[error("request cancelled")]
    Cancelled,
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    Forbidden { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Other { status: Option<u16>, message: String },
}

impl ApiError {
    /// Classify a transport failure.
    #[must_use]
    pub fn from_transport(err: &TransportError) -> Self {
        if err.cancelled {
            return Self::Cancelled;
        }
        let message = extract_message(err);
        match err.status {
            Some(401) => Self::Unauthorized { message },
            Some(403) => Self::Forbidden { message },
            Some(404) => Self::NotFound { message },
            status => Self::Other { status, message },
        }
    }

    /// A 2xx response whose payload did not match the expected shape.
    #[must_use]
    pub fn decode(err: &serde_json::Error) -> Self {
        Self::Other { status: None, message: format!("invalid response payload: {err}") }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// 401 or 403.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::Forbidden { .. })
    }

    /// HTTP status behind this error, when one is known.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Cancelled => None,
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Other { status, .. } => *status,
        }
    }

    /// Human-readable message; empty for [`ApiError::Cancelled`].
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Cancelled => "",
            Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Other { message, .. } => message,
        }
    }

    /// `NotFound`, or a message that reads like "post does not exist".
    #[must_use]
    pub fn mentions_missing_resource(&self) -> bool {
        matches!(self, Self::NotFound { .. }) || contains_any(self.message(), MISSING_RESOURCE_MARKERS)
    }

    /// A message that reads like "only the author may do this".
    #[must_use]
    pub fn mentions_permission(&self) -> bool {
        contains_any(self.message(), PERMISSION_MARKERS)
    }
}

/// Pick the user-facing message for a transport failure: backend body,
/// then transport text, then [`GENERIC_ERROR_MESSAGE`].
#[must_use]
pub fn extract_message(err: &TransportError) -> String {
    let backend = err.backend_message().map(str::trim).filter(|m| !m.is_empty());
    let transport = Some(err.message.trim()).filter(|m| !m.is_empty());
    backend.or(transport).unwrap_or(GENERIC_ERROR_MESSAGE).to_owned()
}

fn contains_any(message: &str, markers: &[&str]) -> bool {
    let lowered = message.to_lowercase();
    markers.iter().any(|m| lowered.contains(m))
}
