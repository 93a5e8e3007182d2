//! Register Codec Error Types

use thiserror::Error;

/// Result type for voltage-regcodec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Register codec errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Byte buffer rejected by the byte-order transformer
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Ordering convention name that matches none of the eight layouts
    #[error("Unknown ordering convention: {0}")]
    UnknownConvention(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for CodecError {
    fn from(err: figment::Error) -> Self {
        CodecError::Config(err.to_string())
    }
}

// Helper methods for creating errors
impl CodecError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        CodecError::InvalidArgument(msg.into())
    }

    pub fn unknown_convention(name: impl Into<String>) -> Self {
        CodecError::UnknownConvention(name.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        CodecError::Config(msg.into())
    }

    /// Check if this error came from buffer validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CodecError::InvalidArgument(_))
    }
}
