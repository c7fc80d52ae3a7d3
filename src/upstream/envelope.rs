//! Upstream envelope unwrapping.
//!
//! Every upstream body looks like `{ "status": ..., "data": ... }`. The caller
//! names the [`Shape`] it expects in `data`; [`unwrap`] either returns the
//! matching [`Payload`] or classifies the failure.

use std::fmt;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::employee::model::Employee;
use crate::error::{FacadeError, FacadeResult};

/// Envelope status the upstream uses for a processed request.
pub const SUCCESS_SENTINEL: &str = "Successfully processed request.";

/// Status and decoded body of one upstream call.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }
}

/// What the caller expects to find in `data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Single,
    List,
    Flag,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Single => write!(f, "employee"),
            Shape::List => write!(f, "employee list"),
            Shape::Flag => write!(f, "boolean"),
        }
    }
}

/// Decoded `data`, tagged by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Single(Employee),
    List(Vec<Employee>),
    Flag(bool),
}

impl Payload {
    pub fn shape(&self) -> Shape {
        match self {
            Payload::Single(_) => Shape::Single,
            Payload::List(_) => Shape::List,
            Payload::Flag(_) => Shape::Flag,
        }
    }

    pub fn into_single(self) -> FacadeResult<Employee> {
        match self {
            Payload::Single(employee) => Ok(employee),
            other => Err(shape_mismatch(Shape::Single, other.shape())),
        }
    }

    pub fn into_list(self) -> FacadeResult<Vec<Employee>> {
        match self {
            Payload::List(employees) => Ok(employees),
            other => Err(shape_mismatch(Shape::List, other.shape())),
        }
    }

    pub fn into_flag(self) -> FacadeResult<bool> {
        match self {
            Payload::Flag(flag) => Ok(flag),
            other => Err(shape_mismatch(Shape::Flag, other.shape())),
        }
    }
}

fn shape_mismatch(expected: Shape, actual: Shape) -> FacadeError {
    FacadeError::ProtocolViolation(format!("expected {expected} payload, got {actual}"))
}

#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    data: Value,
}

/// True when the envelope status is the success sentinel, ignoring ASCII case.
pub fn is_success_status(status: &str) -> bool {
    status.eq_ignore_ascii_case(SUCCESS_SENTINEL)
}

/// Unwrap an upstream response into the requested shape.
///
/// # Errors
/// - [`FacadeError::ProtocolViolation`]: 2xx without a valid envelope, with a
///   payload of the wrong shape, or a status outside 2xx/4xx/5xx
/// - [`FacadeError::UpstreamFailure`]: 2xx whose envelope status is not the sentinel
/// - [`FacadeError::ClientError`] / [`FacadeError::ServerError`]: 4xx / 5xx
pub fn unwrap(response: RawResponse, shape: Shape) -> FacadeResult<Payload> {
    let RawResponse { status, body } = response;

    if status.is_success() {
        let envelope: Envelope = serde_json::from_value(body).map_err(|e| {
            FacadeError::ProtocolViolation(format!("malformed envelope: {e}"))
        })?;

        if !is_success_status(&envelope.status) {
            return Err(FacadeError::UpstreamFailure(envelope.status));
        }

        return decode_payload(envelope.data, shape);
    }

    if status.is_client_error() {
        return Err(FacadeError::ClientError {
            status: status.as_u16(),
            body,
        });
    }

    if status.is_server_error() {
        return Err(FacadeError::ServerError {
            status: status.as_u16(),
            body,
        });
    }

    Err(FacadeError::ProtocolViolation(format!(
        "unexpected upstream status {status}"
    )))
}

fn decode_payload(data: Value, shape: Shape) -> FacadeResult<Payload> {
    match shape {
        Shape::Single => decode(data, shape).map(Payload::Single),
        Shape::List => decode(data, shape).map(Payload::List),
        Shape::Flag => decode(data, shape).map(Payload::Flag),
    }
}

fn decode<T: DeserializeOwned>(data: Value, shape: Shape) -> FacadeResult<T> {
    serde_json::from_value(data)
        .map_err(|e| FacadeError::ProtocolViolation(format!("invalid {shape} payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ok(body: Value) -> RawResponse {
        RawResponse::new(StatusCode::OK, body)
    }

    fn single_body() -> Value {
        json!({
            "status": SUCCESS_SENTINEL,
            "data": {
                "id": "7e44d58c-730e-404a-841e-44bcc9dd87bd",
                "employee_name": "Micheal Hand",
                "employee_salary": 397028,
                "employee_age": 63,
                "employee_title": "Technology Director",
                "employee_email": "tickleme_pink@company.com"
            }
        })
    }

    #[test]
    fn test_unwrap_single() {
        let employee = unwrap(ok(single_body()), Shape::Single)
            .and_then(Payload::into_single)
            .unwrap();
        assert_eq!(employee.id, "7e44d58c-730e-404a-841e-44bcc9dd87bd");
        assert_eq!(employee.salary, Some(397028));
    }

    #[test]
    fn test_unwrap_list_and_flag() {
        let body = json!({"status": SUCCESS_SENTINEL, "data": [{"id": "a"}, {"id": "b"}]});
        let list = unwrap(ok(body), Shape::List).and_then(Payload::into_list).unwrap();
        assert_eq!(list.len(), 2);

        let body = json!({"status": SUCCESS_SENTINEL, "data": true});
        assert!(unwrap(ok(body), Shape::Flag).and_then(Payload::into_flag).unwrap());
    }

    #[test]
    fn test_sentinel_is_case_insensitive() {
        let body = json!({"status": "SUCCESSFULLY PROCESSED REQUEST.", "data": []});
        assert!(unwrap(ok(body), Shape::List).is_ok());

        // exact match apart from case
        assert!(!is_success_status("Successfully processed request. "));
    }

    #[test]
    fn test_non_success_status_is_upstream_failure() {
        let body = json!({"status": "Failed to process request.", "data": null});
        match unwrap(ok(body), Shape::List) {
            Err(FacadeError::UpstreamFailure(status)) => {
                assert_eq!(status, "Failed to process request.")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_envelope_is_protocol_violation() {
        for body in [Value::Null, json!([1, 2]), json!({"data": []})] {
            assert!(matches!(
                unwrap(ok(body), Shape::List),
                Err(FacadeError::ProtocolViolation(_))
            ));
        }
    }

    #[test]
    fn test_shape_mismatch_is_protocol_violation() {
        assert!(matches!(
            unwrap(ok(single_body()), Shape::List),
            Err(FacadeError::ProtocolViolation(_))
        ));
        assert!(matches!(
            Payload::Flag(true).into_single(),
            Err(FacadeError::ProtocolViolation(_))
        ));
    }

    #[test]
    fn test_error_statuses() {
        let body = json!({"error": "nope"});
        match unwrap(RawResponse::new(StatusCode::NOT_FOUND, body.clone()), Shape::Single) {
            Err(FacadeError::ClientError { status, body: echoed }) => {
                assert_eq!(status, 404);
                assert_eq!(echoed, body);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert!(matches!(
            unwrap(RawResponse::new(StatusCode::BAD_GATEWAY, Value::Null), Shape::List),
            Err(FacadeError::ServerError { status: 502, .. })
        ));

        assert!(matches!(
            unwrap(RawResponse::new(StatusCode::FOUND, Value::Null), Shape::List),
            Err(FacadeError::ProtocolViolation(_))
        ));
    }
}
