//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that every endpoint resolves to an absolute URL
//! - Validate value ranges (currency code shape, timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: CheckoutConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use url::Url;

use crate::config::schema::CheckoutConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &CheckoutConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.provider.public_key.trim().is_empty() {
        errors.push(ValidationError {
            field: "provider.public_key",
            message: "must not be empty".to_string(),
        });
    }

    let currency = &config.provider.currency;
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
        errors.push(ValidationError {
            field: "provider.currency",
            message: format!("'{}' is not a 3-letter ISO 4217 code", currency),
        });
    }

    match Url::parse(&config.endpoints.base_url) {
        Ok(base) => {
            if let Err(e) = base.join(&config.endpoints.initiate_path) {
                errors.push(ValidationError {
                    field: "endpoints.initiate_path",
                    message: format!("cannot be resolved against base_url: {}", e),
                });
            }
        }
        Err(e) => errors.push(ValidationError {
            field: "endpoints.base_url",
            message: format!("'{}' is not a valid URL: {}", config.endpoints.base_url, e),
        }),
    }

    if config.http.request_timeout_secs == Some(0) {
        errors.push(ValidationError {
            field: "http.request_timeout_secs",
            message: "must be greater than zero when set".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
