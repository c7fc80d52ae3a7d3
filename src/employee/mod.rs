//! Employee domain.
//!
//! # Data Flow
//! ```text
//! handler
//!     → service.rs (EmployeeCore: fixed upstream call sequence)
//!     → upstream (fetch + unwrap)
//!     → aggregate.rs (filter / max / ranking, pure)
//!     → model.rs values back to the handler
//! ```

pub mod aggregate;
pub mod model;
pub mod service;

pub use model::{CreateEmployeeRequest, DeleteEmployeeRequest, Employee};
pub use service::EmployeeCore;
