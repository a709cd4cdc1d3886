//! Error types for environment resolution

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Failed to parse environment configuration: {details}")]
    ParseError { details: String },

    #[error("Invalid value for {field}: {details}")]
    InvalidValue { field: String, details: String },

    #[error("Unknown profile '{0}', expected 'development' or 'production'")]
    UnknownProfile(String),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
