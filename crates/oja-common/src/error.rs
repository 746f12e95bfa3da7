//! Error types for Oja moderation

use thiserror::Error;

/// Oja moderation error type
#[derive(Error, Debug)]
pub enum OjaError {
    /// Rule pattern failed to compile
    #[error("invalid rule pattern: {0}")]
    InvalidRule(String),

    /// Configuration error
    #[error("config error: {0}")]
    ConfigError(String),
}

/// Result type for Oja moderation
pub type OjaResult<T> = Result<T, OjaError>;
