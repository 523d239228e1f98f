//! Error handling for LightBnB
//!
//! This module defines the main error type used by the data-access layer.
//! Failed queries are logged where they happen and then returned to the
//! caller, so an empty result always means "no rows".

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for LightBnB operations
#[derive(Error, Debug)]
pub enum LightBnbError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Failed to load fixture {}: {source}", path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: Box<LightBnbError>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<sqlx::Error> for LightBnbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation()
                || db_err.is_foreign_key_violation()
                || db_err.is_check_violation()
            {
                let detail = match db_err.constraint() {
                    Some(constraint) => format!("{} ({})", db_err.message(), constraint),
                    None => db_err.message().to_string(),
                };
                return LightBnbError::ConstraintViolation(detail);
            }
        }

        LightBnbError::Database(err)
    }
}

/// Result type alias for LightBnB operations
pub type Result<T> = std::result::Result<T, LightBnbError>;

impl LightBnbError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            LightBnbError::Database(err) => matches!(
                err,
                sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)
            ),
            LightBnbError::ConstraintViolation(_) => false,
            LightBnbError::Config(_) => false,
            LightBnbError::ConfigLoad(_) => false,
            LightBnbError::Fixture { .. } => false,
            LightBnbError::Serialization(_) => false,
            LightBnbError::Io(_) => true,
            LightBnbError::UrlParse(_) => false,
            LightBnbError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LightBnbError::Database(_) => ErrorSeverity::Critical,
            LightBnbError::Config(_) => ErrorSeverity::Critical,
            LightBnbError::ConfigLoad(_) => ErrorSeverity::Critical,
            LightBnbError::ConstraintViolation(_) => ErrorSeverity::Warning,
            LightBnbError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
