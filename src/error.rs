use thiserror::Error;

/// Unified error type for gitver operations
#[derive(Error, Debug)]
pub enum GitverError {
    #[error("History unavailable: {0}")]
    HistoryUnavailable(String),

    #[error("Log format error: {0}")]
    LogFormat(String),

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("Tag format error: {0}")]
    TagFormat(String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gitver
pub type Result<T> = std::result::Result<T, GitverError>;

impl GitverError {
    /// Create a history-unavailable error with context
    pub fn history_unavailable(msg: impl Into<String>) -> Self {
        GitverError::HistoryUnavailable(msg.into())
    }

    /// Create a log format error with context
    pub fn log_format(msg: impl Into<String>) -> Self {
        GitverError::LogFormat(msg.into())
    }

    /// Create a classification error with context
    pub fn classification(msg: impl Into<String>) -> Self {
        GitverError::Classification(msg.into())
    }

    /// Create a tag format error with context
    pub fn tag_format(msg: impl Into<String>) -> Self {
        GitverError::TagFormat(msg.into())
    }

    /// Create an invalid version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        GitverError::InvalidVersion(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitverError::Config(msg.into())
    }
}
