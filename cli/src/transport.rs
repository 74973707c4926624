//! `reqwest`-backed transport for the request pipeline.

use forum_api::registry::CancelSignal;
use forum_api::{ClientConfig, Method, Transport, TransportError, TransportRequest, TransportResponse};
use futures_util::future::LocalBoxFuture;
use serde_json::Value;

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestTransport {
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("forum-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: TransportRequest) -> LocalBoxFuture<'static, Result<TransportResponse, TransportError>> {
        let client = self.client.clone();
        let url = self.config.url_for(&request.path);
        Box::pin(async move {
            if request.cancel.as_ref().is_some_and(CancelSignal::is_cancelled) {
                return Err(TransportError::cancelled());
            }

            let mut builder = client.request(reqwest_method(request.method), &url);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            tracing::debug!(method = %request.method, %url, "sending request");
            let response = builder
                .send()
                .await
                .map_err(|e| TransportError::network(e.to_string()))?;
            let status = response.status();
            let payload = response.json::<Value>().await.ok();
            if !status.is_success() {
                return Err(TransportError::from_status(status.as_u16(), payload));
            }
            Ok(TransportResponse { status: status.as_u16(), payload: payload.unwrap_or(Value::Null) })
        })
    }
}
