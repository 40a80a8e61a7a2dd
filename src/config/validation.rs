//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, body limit > 0)
//! - Reject unknown log levels before anything is served
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: EchoConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use crate::config::schema::EchoConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid log level {0:?}")]
    LogLevel(String),
    #[error("invalid bind address {0:?}")]
    BindAddress(String),
    #[error("timeouts.request_secs must be greater than 0")]
    ZeroTimeout,
    #[error("limits.max_body_bytes must be greater than 0")]
    ZeroBodyLimit,
}

/// Check every semantic constraint, collecting all failures.
pub fn validate_config(config: &EchoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.logs.level().is_err() {
        errors.push(ValidationError::LogLevel(config.logs.level.clone()));
    }
    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
