//! Scripted fakes for pipeline and facade tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde_json::Value;

use crate::navigation::Navigator;
use crate::pipeline::ApiClient;
use crate::token_store::{Credentials, MemoryTokenStore};
use crate::transport::{Method, Transport, TransportError, TransportRequest, TransportResponse};

type Reply = Result<TransportResponse, TransportError>;

/// Transport that answers from per-route queues after yielding once to the executor.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
    pub(crate) sent: RefCell<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn reply_ok(&self, method: Method, path: &str, payload: Value) {
        self.push(method, path, Ok(TransportResponse { status: 200, payload }));
    }

    pub(crate) fn reply_status(&self, method: Method, path: &str, status: u16, message: &str) {
        let body = serde_json::json!({ "success": false, "data": null, "message": message });
        self.push(method, path, Err(TransportError::from_status(status, Some(body))));
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.replies.borrow_mut().entry((method, path.to_owned())).or_default().push_back(reply);
    }

    pub(crate) fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: TransportRequest) -> LocalBoxFuture<'static, Reply> {
        let reply = self
            .replies
            .borrow_mut()
            .get_mut(&(request.method, request.path.clone()))
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(TransportError::network(format!("no scripted reply for {}", request.path))));
        self.sent.borrow_mut().push(request);
        Box::pin(async move {
            tokio::task::yield_now().await;
            reply
        })
    }
}

/// Navigator that records redirects.
pub(crate) struct RecordingNavigator {
    pub(crate) path: RefCell<String>,
    pub(crate) redirects: Cell<u32>,
}

impl RecordingNavigator {
    pub(crate) fn at(path: &str) -> Self {
        Self { path: RefCell::new(path.to_owned()), redirects: Cell::new(0) }
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn redirect_to_login(&self) {
        self.redirects.set(self.redirects.get() + 1);
        *self.path.borrow_mut() = "/login".to_owned();
    }
}

pub(crate) struct Harness {
    pub(crate) transport: Rc<ScriptedTransport>,
    pub(crate) tokens: Rc<MemoryTokenStore>,
    pub(crate) navigator: Rc<RecordingNavigator>,
    pub(crate) client: ApiClient,
}

impl Harness {
    pub(crate) fn new(path: &str, credentials: Option<&Credentials>) -> Self {
        let transport = Rc::new(ScriptedTransport::default());
        let tokens = Rc::new(credentials.map_or_else(MemoryTokenStore::new, MemoryTokenStore::with_credentials));
        let navigator = Rc::new(RecordingNavigator::at(path));
        let client = ApiClient::new(transport.clone(), tokens.clone(), navigator.clone());
        Self { transport, tokens, navigator, client }
    }
}

pub(crate) fn sample_credentials() -> Credentials {
    Credentials { access_token: "access-abc".to_owned(), refresh_token: "refresh-xyz".to_owned() }
}

pub(crate) fn page_payload(number: u32, last: bool, items: &[(i64, &str)]) -> Value {
    let content: Vec<Value> = items
        .iter()
        .map(|(id, author)| serde_json::json!({ "id": id, "title": format!("post {id}"), "username": author, "view": 0 }))
        .collect();
    serde_json::json!({
        "success": true,
        "message": "",
        "data": {
            "content": content,
            "totalElements": items.len(),
            "totalPages": number + 1,
            "size": 10,
            "number": number,
            "first": number == 0,
            "last": last
        }
    })
}
