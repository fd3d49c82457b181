//! Configuration loading error types.
//!
//! Domain-specific errors for parsing a mapping document and validating
//! the model built from it.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised while loading a sync mapping document.
///
/// A load either publishes a complete project table or fails with exactly
/// one of these errors. Partial results are never returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The document is not well-formed XML.
    #[error("Failed to parse configuration: {reason}")]
    ParseError { reason: String },

    /// One or more template placeholders reference undeclared fields.
    ///
    /// `message` holds the direction-tagged text of every offending mapping,
    /// concatenated in document order (inbound messages first).
    #[error("Configuration validation failed: {message}")]
    ValidationFailed { message: String },
}

impl From<roxmltree::Error> for ConfigurationError {
    fn from(err: roxmltree::Error) -> Self {
        ConfigurationError::ParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for configuration operations.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
