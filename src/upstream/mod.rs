//! Upstream directory access.
//!
//! # Data Flow
//! ```text
//! EmployeeCore
//!     → client.rs (HTTP call, returns status + JSON tree)
//!     → envelope.rs (check { status, data }, decode data into a Shape)
//!     → Payload or FacadeError
//! ```

pub mod client;
pub mod envelope;

pub use client::UpstreamClient;
pub use envelope::{Payload, RawResponse, Shape, SUCCESS_SENTINEL};
