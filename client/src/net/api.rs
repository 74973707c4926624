//! Process-wide API client for the browser UI.
//!
//! Browser (csr): a `gloo-net` transport, `localStorage` tokens, and
//! `window.location` navigation.
//! Native builds (tests, tooling): an offline transport that fails every call
//! and an in-memory token store, so components render without a browser.
//!
//! The client is `!Send` (it shares one in-flight registry through `Rc`), so
//! it lives in a thread-local instead of a Leptos context.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use forum_api::{ApiClient, ClientConfig};

thread_local! {
    static CLIENT: ApiClient = build_client();
}

/// Shared pipeline handle; clones share the same in-flight registry.
pub fn client() -> ApiClient {
    CLIENT.with(Clone::clone)
}

/// API origin baked in at compile time via `FORUM_API_URL`.
pub fn config() -> ClientConfig {
    config_from(option_env!("FORUM_API_URL"))
}

fn config_from(raw: Option<&str>) -> ClientConfig {
    ClientConfig::from_value(raw).unwrap_or_else(|e| {
        log::warn!("{e}; falling back to {}", forum_api::config::DEFAULT_API_BASE_URL);
        ClientConfig::default()
    })
}

#[cfg(feature = "csr")]
fn build_client() -> ApiClient {
    use std::rc::Rc;

    use super::browser::{FetchTransport, LocalStorageTokenStore, WindowNavigator};

    ApiClient::new(Rc::new(FetchTransport::new(config())), Rc::new(LocalStorageTokenStore), Rc::new(WindowNavigator))
}

#[cfg(not(feature = "csr"))]
fn build_client() -> ApiClient {
    use std::rc::Rc;

    ApiClient::new(Rc::new(offline::OfflineTransport), Rc::new(forum_api::MemoryTokenStore::new()), Rc::new(offline::FixedNavigator))
}

#[cfg(not(feature = "csr"))]
mod offline {
    use std::future::Future;
    use std::pin::Pin;

    use forum_api::{Navigator, Transport, TransportError, TransportRequest, TransportResponse};

    pub(super) const OFFLINE_MESSAGE: &str = "not available outside the browser";

    pub(super) struct OfflineTransport;

    impl Transport for OfflineTransport {
        fn send(
            &self,
            _request: TransportRequest,
        ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>>>> {
            Box::pin(std::future::ready(Err(TransportError::network(OFFLINE_MESSAGE))))
        }
    }

    pub(super) struct FixedNavigator;

    impl Navigator for FixedNavigator {
        fn current_path(&self) -> String {
            "/".to_owned()
        }

        fn redirect_to_login(&self) {
            log::info!("redirect to login requested outside the browser");
        }
    }
}
