//! Unified error types for the domain layer
//!
//! Every operation on annotation values reports failures through [`DomainError`].
//! Errors are raised synchronously to the caller (usually a form); nothing here
//! is retried or recovered internally.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The `required` flag could not be resolved for an annotation type
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown or unsupported annotation value type
    #[error("Invalid value type: {0}")]
    InvalidValueType(String),

    /// Malformed source string (dates, times)
    #[error("Parse error: {0}")]
    Parse(String),

    /// The annotation type is in a state the operation cannot handle
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// User input failed validation
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an invalid value type error
    pub fn invalid_value_type(msg: impl Into<String>) -> Self {
        Self::InvalidValueType(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this when an input string does not match the expected pattern:
    /// - Dates not in `YYYY-MM-DD` form
    /// - Times not in `YYYY-MM-DD h:mm:ss a` form
    ///
    /// # Example
    /// ```ignore
    /// NaiveDate::parse_from_str(s, "%Y-%m-%d")
    ///     .map_err(|e| DomainError::parse(format!("invalid date '{}': {}", s, e)))?;
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Creates a validation error for rejected user input.
    ///
    /// # Example
    /// ```ignore
    /// if input.is_empty() {
    ///     return Err(DomainError::validation("amount cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
