//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! facade.toml
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → FacadeConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; the upstream base URI never changes afterwards
//! - All fields have defaults except `api.base.uri`, which validation requires
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ApiConfig, BaseUriConfig, FacadeConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
