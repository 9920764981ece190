//! Error handling for the gateway configuration
//!
//! Validation itself reports problems as messages. This error type covers
//! everything around it: reading and parsing files, and turning a non-empty
//! problem list into a failure for callers that want one.

use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors, one entry per problem found
    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl GatewayError {
    /// Problems carried by a validation error
    pub fn problems(&self) -> &[String] {
        match self {
            Self::Validation(problems) => problems,
            _ => &[],
        }
    }
}
