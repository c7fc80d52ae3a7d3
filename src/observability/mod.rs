//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers, core and upstream client produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!     → tracing.rs (per-request spans carrying the request ID)
//!
//! Consumers:
//!     → stdout (plain or JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every span
//! - Metric calls are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
pub mod tracing;
