//! HTTP facade over an upstream employee directory.
//!
//! Re-exposes the upstream's list/get/create/delete endpoints, unwrapping its
//! `{ status, data }` envelopes, and adds name search, highest salary and
//! top-ten earner queries computed in memory.

pub mod config;
pub mod employee;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::FacadeConfig;
pub use employee::EmployeeCore;
pub use error::{FacadeError, FacadeResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::UpstreamClient;
