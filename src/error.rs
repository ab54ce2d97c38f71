use thiserror::Error;

/// Unified error type for version-gate operations
#[derive(Error, Debug)]
pub enum VersionGateError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version extraction failed: {0}")]
    Extract(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Reference error: {0}")]
    Ref(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-gate
pub type Result<T> = std::result::Result<T, VersionGateError>;

impl VersionGateError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionGateError::Config(msg.into())
    }

    /// Create an extraction error with context
    pub fn extract(msg: impl Into<String>) -> Self {
        VersionGateError::Extract(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        VersionGateError::Version(msg.into())
    }

    /// Create a reference error with context
    pub fn git_ref(msg: impl Into<String>) -> Self {
        VersionGateError::Ref(msg.into())
    }
}
