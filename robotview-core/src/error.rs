//! Error types for robotview

use thiserror::Error;

/// Main error type for robotview operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The frame graph has no path between the two frames right now
    #[error("No transform from frame '{from}' to frame '{to}'")]
    MissingTransform { from: String, to: String },

    /// No model asset configured, or the configured one could not be loaded
    #[error("Model asset unavailable: {0}")]
    MissingAsset(String),

    #[error("Missing required parameter: {0}")]
    MissingParam(String),

    #[error("Invalid parameter '{key}': {reason}")]
    InvalidParam { key: String, reason: String },
}

impl Error {
    pub fn missing_transform(from: &str, to: &str) -> Self {
        Error::MissingTransform {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn invalid_param(key: &str, reason: impl Into<String>) -> Self {
        Error::InvalidParam {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for robotview operations
pub type Result<T> = std::result::Result<T, Error>;
