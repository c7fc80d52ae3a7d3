//! External error responses.
//!
//! Internal [`FacadeError`]s are converted here, once, at the handler
//! boundary:
//!
//! | internal | external |
//! |---|---|
//! | `ClientError` 404, `EmptyInput` | 404 Not Found |
//! | `ClientError` other 4xx | 400 Bad Request |
//! | everything else | 502 Bad Gateway |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::FacadeError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Upstream request failed")]
    Upstream,
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<FacadeError> for ApiError {
    fn from(error: FacadeError) -> Self {
        match error {
            FacadeError::ClientError { status: 404, body } => {
                tracing::warn!(upstream_body = %body, "Upstream reported resource not found");
                ApiError::NotFound("Employee not present".to_string())
            }
            FacadeError::ClientError { status, body } => {
                tracing::warn!(upstream_status = status, upstream_body = %body, "Upstream rejected request");
                ApiError::BadRequest(format!("Upstream rejected request with status {status}"))
            }
            FacadeError::EmptyInput => {
                tracing::warn!("No employee data to aggregate");
                ApiError::NotFound("No employee salaries present".to_string())
            }
            other => {
                tracing::error!(error = %other, "Upstream request failed");
                ApiError::Upstream
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            status: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
