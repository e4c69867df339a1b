//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject handler labels that carry no information
//! - Reject routes that can never be resolved
//! - Check the log filter directive parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Duplicate paths are allowed (last one wins at build time)

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::RouterConfig;

/// A single semantic problem in a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("root_handler must not be blank")]
    BlankRootHandler,

    #[error("not_found_handler must not be blank")]
    BlankNotFoundHandler,

    #[error("route `{path}` has a blank handler")]
    BlankHandler { path: String },

    /// `resolve("")` always falls back, so an empty path is dead.
    #[error("route #{index} (handler `{handler}`) has an empty path; use \"/\" to override the root")]
    EmptyPath { index: usize, handler: String },

    #[error("invalid log_level `{level}`: {reason}")]
    InvalidLogLevel { level: String, reason: String },
}

/// Check a parsed config for semantic errors.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.root_handler.trim().is_empty() {
        errors.push(ValidationError::BlankRootHandler);
    }
    if config.not_found_handler.trim().is_empty() {
        errors.push(ValidationError::BlankNotFoundHandler);
    }

    for (index, route) in config.routes.iter().enumerate() {
        if route.path.is_empty() {
            errors.push(ValidationError::EmptyPath {
                index,
                handler: route.handler.clone(),
            });
        }
        if route.handler.trim().is_empty() {
            errors.push(ValidationError::BlankHandler {
                path: route.path.clone(),
            });
        }
    }

    let level = &config.observability.log_level;
    if let Err(e) = EnvFilter::try_new(level) {
        errors.push(ValidationError::InvalidLogLevel {
            level: level.clone(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
