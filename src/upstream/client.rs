//! HTTP client for the upstream employee directory.
//!
//! # Responsibilities
//! - Join relative paths onto the configured base URI
//! - Issue GET/POST/DELETE with JSON bodies
//! - Return the status verbatim and the body as a JSON tree
//!
//! Status codes and envelopes are not interpreted here; see `envelope.rs`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::config::schema::{ApiConfig, TimeoutConfig};
use crate::error::{FacadeError, FacadeResult};
use crate::observability::metrics;
use crate::upstream::envelope::RawResponse;

/// Stateless client for the upstream API. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_uri: Arc<str>,
}

impl UpstreamClient {
    /// Create a client over an existing transport.
    pub fn new(base_uri: impl Into<String>, http: Client) -> Self {
        Self {
            http,
            base_uri: Arc::from(base_uri.into()),
        }
    }

    /// Build a client with timeouts taken from configuration.
    pub fn from_config(api: &ApiConfig, timeouts: &TimeoutConfig) -> FacadeResult<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.upstream_secs))
            .build()
            .map_err(|e| {
                FacadeError::UpstreamUnavailable(format!("failed to build HTTP client: {e}"))
            })?;

        tracing::info!(
            base_uri = %api.base.uri,
            connect_timeout_secs = timeouts.connect_secs,
            upstream_timeout_secs = timeouts.upstream_secs,
            "Upstream client initialized"
        );

        Ok(Self::new(api.base.uri.clone(), http))
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Absolute URL for `path`. Plain concatenation, no encoding.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_uri, path)
    }

    pub async fn get(&self, path: &str) -> FacadeResult<RawResponse> {
        let request = self.http.get(self.url(path));
        self.send(Method::GET, path, request).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> FacadeResult<RawResponse>
    where
        B: Serialize + ?Sized,
    {
        let request = self.http.post(self.url(path)).json(body);
        self.send(Method::POST, path, request).await
    }

    /// DELETE carrying a JSON body.
    pub async fn delete<B>(&self, path: &str, body: &B) -> FacadeResult<RawResponse>
    where
        B: Serialize + ?Sized,
    {
        let request = self.http.delete(self.url(path)).json(body);
        self.send(Method::DELETE, path, request).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> FacadeResult<RawResponse> {
        let start = Instant::now();
        tracing::debug!(method = %method, path = %path, "Calling upstream");

        let result = execute(request).await;
        match &result {
            Ok(response) => {
                tracing::debug!(
                    method = %method,
                    path = %path,
                    status = %response.status,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Upstream responded"
                );
                metrics::record_upstream_call(method.as_str(), response.status.as_u16(), start);
            }
            Err(e) => {
                tracing::error!(method = %method, path = %path, error = %e, "Upstream call failed");
                metrics::record_upstream_failure(method.as_str(), start);
            }
        }
        result
    }
}

async fn execute(request: RequestBuilder) -> FacadeResult<RawResponse> {
    let response = request
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(transport_error)?;

    let status = response.status();
    let bytes = response.bytes().await.map_err(transport_error)?;
    let body = decode_body(status, &bytes)?;
    Ok(RawResponse::new(status, body))
}

/// Empty bodies become `null`. Non-JSON error bodies are kept as a string so
/// the status can still be classified.
fn decode_body(status: StatusCode, bytes: &[u8]) -> FacadeResult<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    match serde_json::from_slice(bytes) {
        Ok(value) => Ok(value),
        Err(e) if status.is_success() => Err(FacadeError::UpstreamUnavailable(format!(
            "undecodable upstream body: {e}"
        ))),
        Err(_) => Ok(Value::String(String::from_utf8_lossy(bytes).into_owned())),
    }
}

fn transport_error(e: reqwest::Error) -> FacadeError {
    if e.is_timeout() {
        FacadeError::UpstreamUnavailable(format!("upstream timed out: {e}"))
    } else {
        FacadeError::UpstreamUnavailable(e.to_string())
    }
}
