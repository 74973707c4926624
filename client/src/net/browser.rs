//! Browser implementations of the pipeline's capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! `FetchTransport` issues requests with `gloo-net`, `LocalStorageTokenStore`
//! keeps the token pair in `window.localStorage`, and `WindowNavigator` reads
//! and sets `window.location`. A full page load to `/login` is used for forced
//! logout so every signal is rebuilt from the (now empty) store.

use forum_api::navigation::LOGIN_PATH;
use forum_api::{ClientConfig, Method, Navigator, TokenName, TokenStore, Transport, TransportError, TransportRequest, TransportResponse};
use futures::future::LocalBoxFuture;
use gloo_net::http::RequestBuilder;
use serde_json::Value;

fn gloo_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Patch => gloo_net::http::Method::PATCH,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}

/// `fetch`-backed transport rooted at the configured API origin.
pub struct FetchTransport {
    config: ClientConfig,
}

impl FetchTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl Transport for FetchTransport {
    fn send(&self, request: TransportRequest) -> LocalBoxFuture<'static, Result<TransportResponse, TransportError>> {
        let url = self.config.url_for(&request.path);
        Box::pin(async move {
            if request.cancel.as_ref().is_some_and(forum_api::registry::CancelSignal::is_cancelled) {
                return Err(TransportError::cancelled());
            }

            let mut builder = RequestBuilder::new(&url)
                .method(gloo_method(request.method))
                .header("Content-Type", "application/json");
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if !request.query.is_empty() {
                builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::network(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| TransportError::network(e.to_string()))?;
            let status = resp.status();
            let payload = resp.json::<Value>().await.ok();
            if !resp.ok() {
                return Err(TransportError::from_status(status, payload));
            }
            Ok(TransportResponse { status, payload: payload.unwrap_or(Value::Null) })
        })
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Token pair persisted in `localStorage` under `accessToken` / `refreshToken`.
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn get(&self, name: TokenName) -> Option<String> {
        local_storage()?.get_item(name.key()).ok().flatten()
    }

    fn set(&self, name: TokenName, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(name.key(), value);
        }
    }

    fn remove(&self, name: TokenName) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(name.key());
        }
    }
}

/// Navigator over `window.location`.
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }

    fn redirect_to_login(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
}
