//! In-process stub of the EduAI backend.
//!
//! Every request is recorded. Responses are looked up by method and path;
//! unknown routes answer 404 with a `detail` body.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use eduai_core::{ApiClient, Session};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
enum Canned {
    Json(u16, Value),
    Empty(u16),
    Raw(u16, String),
}

#[derive(Default)]
struct StubState {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<HashMap<(String, String), Canned>>,
}

pub struct StubBackend {
    pub base_url: String,
    state: Arc<StubState>,
    server: JoinHandle<()>,
}

impl StubBackend {
    pub async fn start() -> Self {
        let state = Arc::new(StubState::default());
        let router = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
            server,
        }
    }

    pub fn client(&self, session: Session) -> ApiClient {
        ApiClient::new(&self.base_url, session).unwrap()
    }

    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.insert(method, path, Canned::Json(status, body));
    }

    pub fn respond_empty(&self, method: &str, path: &str, status: u16) {
        self.insert(method, path, Canned::Empty(status));
    }

    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) {
        self.insert(method, path, Canned::Raw(status, body.to_string()));
    }

    fn insert(&self, method: &str, path: &str, canned: Canned) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), canned);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    pub fn clear(&self) {
        self.state.requests.lock().unwrap().clear();
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).ok(),
    };
    let key = (recorded.method.clone(), recorded.path.clone());
    state.requests.lock().unwrap().push(recorded);

    let canned = state.responses.lock().unwrap().get(&key).cloned();
    match canned {
        Some(Canned::Json(status, value)) => (code(status), Json(value)).into_response(),
        Some(Canned::Empty(status)) => code(status).into_response(),
        Some(Canned::Raw(status, text)) => (code(status), text).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"detail": "Not Found"}))).into_response(),
    }
}

fn code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap()
}
