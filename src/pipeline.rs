//! Request pipeline: the single entry and exit point for backend calls.
//!
//! ARCHITECTURE
//! ============
//! `ApiClient` owns the in-flight registry and holds the token store,
//! navigator, and transport capabilities. Each call runs two phases:
//!
//! 1. Outbound (synchronous, before the first `.await`): attach the bearer
//!    token; for reads, fingerprint the request and register it, aborting any
//!    identical read still outstanding.
//! 2. Completion: release the registry entry (ticket-guarded, so a superseded
//!    call never evicts its replacement; also released if the caller drops
//!    the future early), classify failures, and force a
//!    logout on 401/403 unless the request was a public post read.
//!
//! Expected conditions (cancellation, forced logout) come back as classified
//! [`ApiError`] values; nothing here panics.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::fingerprint::{Fingerprint, fingerprint};
use crate::navigation::{Navigator, is_auth_view};
use crate::registry::{Dispatch, InFlightRegistry};
use crate::token_store::{TokenName, TokenStore, clear_credentials};
use crate::transport::{Method, Transport, TransportError, TransportRequest};

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Root of the post-retrieval endpoint family readable without a session.
pub const POST_RESOURCE_PATH: &str = "/api/post";

/// Whether an auth failure on this request must leave the session alone.
#[must_use]
pub fn is_public_read(method: Method, path: &str) -> bool {
    method.is_read()
        && path
            .strip_prefix(POST_RESOURCE_PATH)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Releases a read's registry entry when the call settles or its future is dropped.
struct ReleaseOnDrop<'a> {
    registry: &'a RefCell<InFlightRegistry>,
    key: Fingerprint,
    ticket: u64,
}

impl Drop for ReleaseOnDrop<'_> {
    fn drop(&mut self) {
        if let Ok(mut registry) = self.registry.try_borrow_mut() {
            registry.release_ticket(&self.key, self.ticket);
        }
    }
}

struct Inner {
    transport: Rc<dyn Transport>,
    tokens: Rc<dyn TokenStore>,
    navigator: Rc<dyn Navigator>,
    registry: RefCell<InFlightRegistry>,
    invalidation_hooks: RefCell<Vec<Rc<dyn Fn()>>>,
}

/// Shared request pipeline. Clones share one registry and one set of capabilities.
#[derive(Clone)]
pub struct ApiClient {
    inner: Rc<Inner>,
}

impl ApiClient {
    #[must_use]
    pub fn new(transport: Rc<dyn Transport>, tokens: Rc<dyn TokenStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            inner: Rc::new(Inner {
                transport,
                tokens,
                navigator,
                registry: RefCell::new(InFlightRegistry::new()),
                invalidation_hooks: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Token store this client reads credentials from.
    #[must_use]
    pub fn token_store(&self) -> &dyn TokenStore {
        &*self.inner.tokens
    }

    /// Number of reads currently outstanding.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.inner.registry.borrow().len()
    }

    /// Run `hook` after every forced logout, once the tokens are cleared and
    /// before any redirect. Lets UI state that mirrors the token store catch up
    /// when no navigation happens (e.g. a 401 while already on `/login`).
    pub fn on_session_invalidated(&self, hook: impl Fn() + 'static) {
        self.inner.invalidation_hooks.borrow_mut().push(Rc::new(hook));
    }

    /// Abort every outstanding read; their callers observe [`ApiError::Cancelled`].
    pub fn cancel_in_flight(&self) {
        self.inner.registry.borrow_mut().cancel_all();
    }

    /// Send `request` and return the raw response payload.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for cancelled, rejected, or failed calls.
    pub async fn send(&self, mut request: TransportRequest) -> Result<Value, ApiError> {
        let method = request.method;
        let path = request.path.clone();

        if let Some(token) = self.inner.tokens.get(TokenName::Access) {
            request.headers.retain(|(name, _)| !name.eq_ignore_ascii_case(AUTHORIZATION_HEADER));
            request.headers.push((AUTHORIZATION_HEADER.to_owned(), format!("Bearer {token}")));
        }

        let outcome = if method.is_read() {
            let token = self
                .inner
                .registry
                .borrow_mut()
                .register(fingerprint(method, &path, &request.query));
            if token.dispatch() == Dispatch::Supersede {
                log::debug!("superseded in-flight read {}", token.fingerprint());
            }
            let _release = ReleaseOnDrop {
                registry: &self.inner.registry,
                key: token.fingerprint().clone(),
                ticket: token.ticket(),
            };
            request.cancel = Some(token.signal());

            let result = token.guard(self.inner.transport.send(request)).await;
            result.unwrap_or_else(|_aborted| Err(TransportError::cancelled()))
        } else {
            self.inner.transport.send(request).await
        };

        match outcome {
            Ok(response) => {
                log::debug!("{method} {path} -> {}", response.status);
                Ok(response.payload)
            }
            Err(err) => Err(self.settle_failure(method, &path, &err)),
        }
    }

    /// Send `request` and decode the payload as `T`.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::send`], plus [`ApiError::Other`] when the payload does not decode.
    pub async fn send_json<T: DeserializeOwned>(&self, request: TransportRequest) -> Result<T, ApiError> {
        let payload = self.send(request).await?;
        serde_json::from_value(payload).map_err(|e| ApiError::decode(&e))
    }

    fn settle_failure(&self, method: Method, path: &str, err: &TransportError) -> ApiError {
        let error = ApiError::from_transport(err);
        match &error {
            ApiError::Cancelled => log::debug!("{method} {path} cancelled"),
            e if e.is_auth_failure() => {
                if is_public_read(method, path) {
                    log::debug!("{method} {path} -> {:?}; public read, session kept", e.status());
                } else {
                    self.invalidate_session(method, path);
                }
            }
            e => log::warn!("{method} {path} failed: status={:?} message={}", e.status(), e.message()),
        }
        error
    }

    fn invalidate_session(&self, method: Method, path: &str) {
        log::warn!("{method} {path} rejected credentials; clearing session");
        clear_credentials(&*self.inner.tokens);
        let hooks = self.inner.invalidation_hooks.borrow().clone();
        for hook in hooks {
            hook();
        }
        if !is_auth_view(&self.inner.navigator.current_path()) {
            self.inner.navigator.redirect_to_login();
        }
    }
}
