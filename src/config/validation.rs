//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Require an absolute http(s) upstream base URI without a trailing slash
//! - Validate socket addresses and timeouts
//! - Keep the inbound timeout longer than two upstream calls
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FacadeConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::FacadeConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("api.base.uri is required")]
    MissingBaseUri,

    #[error("api.base.uri '{uri}' is invalid: {reason}")]
    InvalidBaseUri { uri: String, reason: String },

    #[error("api.base.uri '{0}' must not end with '/'")]
    TrailingSlash(String),

    #[error("{field} '{value}' is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error(
        "timeouts.request_secs ({request_secs}) must exceed twice timeouts.upstream_secs ({upstream_secs})"
    )]
    RequestTimeoutTooShort { request_secs: u64, upstream_secs: u64 },
}

pub fn validate_config(config: &FacadeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_base_uri(&config.api.base.uri, &mut errors);

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    let timeouts = [
        ("timeouts.connect_secs", config.timeouts.connect_secs),
        ("timeouts.upstream_secs", config.timeouts.upstream_secs),
        ("timeouts.request_secs", config.timeouts.request_secs),
    ];
    for (field, secs) in timeouts {
        if secs == 0 {
            errors.push(ValidationError::ZeroTimeout(field));
        }
    }

    // Delete makes two sequential upstream calls.
    let (request_secs, upstream_secs) = (config.timeouts.request_secs, config.timeouts.upstream_secs);
    if request_secs > 0 && upstream_secs > 0 && request_secs <= upstream_secs.saturating_mul(2) {
        errors.push(ValidationError::RequestTimeoutTooShort {
            request_secs,
            upstream_secs,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_base_uri(uri: &str, errors: &mut Vec<ValidationError>) {
    if uri.trim().is_empty() {
        errors.push(ValidationError::MissingBaseUri);
        return;
    }

    match Url::parse(uri) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidBaseUri {
            uri: uri.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidBaseUri {
            uri: uri.to_string(),
            reason: e.to_string(),
        }),
    }

    if uri.ends_with('/') {
        errors.push(ValidationError::TrailingSlash(uri.to_string()));
    }
}
