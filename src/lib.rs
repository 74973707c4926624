//! # forum-api
//!
//! Shared HTTP client layer for the forum frontends (`client/` in the browser,
//! `cli/` in a terminal).
//!
//! The crate owns the request pipeline and everything it depends on: the
//! token store contract, request fingerprinting, the in-flight registry used
//! to drop superseded duplicate reads, error classification, and the typed
//! auth/post facades. Network, storage, and navigation are capabilities
//! supplied by each frontend.

pub mod auth;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod jwt;
pub mod navigation;
pub mod pipeline;
pub mod posts;
pub mod registry;
pub mod session;
pub mod token_store;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use auth::AuthApi;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use navigation::Navigator;
pub use pipeline::ApiClient;
pub use posts::PostApi;
pub use session::Session;
pub use token_store::{Credentials, MemoryTokenStore, TokenName, TokenStore};
pub use transport::{Method, Transport, TransportError, TransportRequest, TransportResponse};
