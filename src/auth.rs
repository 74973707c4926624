//! Typed calls for the authentication endpoint pair.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ApiError;
use crate::pipeline::ApiClient;
use crate::transport::{Method, TransportRequest};
use crate::types::{Acknowledgement, ApiEnvelope, LoginRequest, LoginResponse, RegisterRequest};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";

/// `/api/auth/*` facade.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    #[must_use]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error.
    pub async fn login(&self, request: &LoginRequest) -> Result<ApiEnvelope<LoginResponse>, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::decode(&e))?;
        self.client
            .send_json(TransportRequest::new(Method::Post, LOGIN_ENDPOINT).with_body(body))
            .await
    }

    /// `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Acknowledgement, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::decode(&e))?;
        self.client
            .send_json(TransportRequest::new(Method::Post, REGISTER_ENDPOINT).with_body(body))
            .await
    }
}
