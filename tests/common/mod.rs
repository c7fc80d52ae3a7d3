//! Shared utilities for integration tests: a programmable, recording mock
//! upstream and a helper that boots the facade in front of it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use employee_facade::config::{ApiConfig, FacadeConfig};
use employee_facade::{HttpServer, Shutdown};

/// Path prefix the facade is configured with.
pub const API_PREFIX: &str = "/api/v1";

pub const SINGLE_ID: &str = "7e44d58c-730e-404a-841e-44bcc9dd87bd";

pub const SUCCESS: &str = "Successfully processed request.";

pub fn employee_list_fixture() -> Value {
    serde_json::from_str(include_str!("../fixtures/employee-list.json")).unwrap()
}

pub fn employee_fixture() -> Value {
    serde_json::from_str(include_str!("../fixtures/employee.json")).unwrap()
}

pub fn envelope(data: Value) -> Value {
    json!({ "status": SUCCESS, "data": data })
}

/// One request as seen by the mock upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Value,
}

/// Mock upstream that answers from a table keyed by (method, path) and
/// records every request it receives. Unknown routes get a bare 404.
#[derive(Clone, Default)]
pub struct MockUpstream {
    responses: Arc<Mutex<HashMap<(Method, String), (u16, String)>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Program a raw response. `path` is relative to [`API_PREFIX`].
    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert((method, format!("{API_PREFIX}{path}")), (status, body.to_string()));
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: &Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Bind to an ephemeral port and serve in the background.
    pub async fn start(&self) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(handle).with_state(self.clone());

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        addr
    }
}

async fn handle(
    State(mock): State<MockUpstream>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let body_json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    mock.calls.lock().unwrap().push(RecordedCall {
        method: method.clone(),
        path: path.clone(),
        body: body_json,
    });

    let programmed = mock.responses.lock().unwrap().get(&(method, path)).cloned();
    match programmed {
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap(),
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// A running facade plus the handle that stops it.
pub struct Facade {
    pub base_url: String,
    pub shutdown: Shutdown,
}

impl Drop for Facade {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the facade on an ephemeral port, pointed at `upstream`.
pub async fn start_facade(upstream: SocketAddr) -> Facade {
    let mut config = FacadeConfig {
        api: ApiConfig::with_base_uri(format!("http://{upstream}{API_PREFIX}")),
        ..FacadeConfig::default()
    };
    config.listener.bind_address = "127.0.0.1:0".into();
    config.timeouts.upstream_secs = 5;

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::from_config(config).unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    Facade {
        base_url: format!("http://{addr}"),
        shutdown,
    }
}

/// Mock upstream and facade, wired together.
pub async fn setup() -> (MockUpstream, Facade) {
    let upstream = MockUpstream::new();
    let addr = upstream.start().await;
    let facade = start_facade(addr).await;
    (upstream, facade)
}
