//! Internal error taxonomy.
//!
//! Every failure inside the facade is one of these variants. They travel
//! unchanged from the upstream client, envelope unwrapping and aggregation up
//! to the handlers, where `http::error` turns them into HTTP responses.

use serde_json::Value;
use thiserror::Error;

/// Errors produced while talking to the upstream or aggregating its data.
#[derive(Debug, Error)]
pub enum FacadeError {
    /// Transport failure, timeout, or a body that is not JSON.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// 2xx response whose envelope or payload does not have the expected shape.
    #[error("upstream protocol violation: {0}")]
    ProtocolViolation(String),

    /// 2xx response whose envelope status is not the success sentinel.
    #[error("upstream reported failure: {0}")]
    UpstreamFailure(String),

    /// Upstream answered with a 4xx status.
    #[error("upstream client error {status}")]
    ClientError { status: u16, body: Value },

    /// Upstream answered with a 5xx status.
    #[error("upstream server error {status}")]
    ServerError { status: u16, body: Value },

    /// An aggregate was requested over a list with nothing to aggregate.
    #[error("no input to aggregate")]
    EmptyInput,
}

/// Result type for facade operations.
pub type FacadeResult<T> = Result<T, FacadeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = FacadeError::ClientError {
            status: 429,
            body: json!({"status": "Too Many Requests"}),
        };
        assert_eq!(err.to_string(), "upstream client error 429");

        let err = FacadeError::UpstreamFailure("Failed to process request.".into());
        assert!(err.to_string().contains("Failed to process request."));
    }
}
