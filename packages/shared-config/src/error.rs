//! Configuration error types

use thiserror::Error;

/// Errors raised while loading configuration from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but cannot be parsed
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),

    /// The database connection URL is not a MongoDB URL
    #[error("invalid connection URL in {0}: {1}")]
    InvalidUrl(String, String),

    /// Individually valid settings that contradict each other
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
