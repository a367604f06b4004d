//! Serial Link Error Types

use thiserror::Error;

/// Errors raised around the receive path
#[derive(Debug, Error)]
pub enum LinkError {
    /// Serial port could not be opened or configured
    #[error("Serial port error: {0}")]
    Serial(String),

    /// Transport read failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Telemetry encoding or decoding failed
    #[error("Encoding error: {0}")]
    Encode(String),

    /// Global subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl From<tokio_serial::Error> for LinkError {
    fn from(err: tokio_serial::Error) -> Self {
        LinkError::Serial(err.to_string())
    }
}

impl From<config::ConfigError> for LinkError {
    fn from(err: config::ConfigError) -> Self {
        LinkError::Config(err.to_string())
    }
}

impl From<postcard::Error> for LinkError {
    fn from(err: postcard::Error) -> Self {
        LinkError::Encode(err.to_string())
    }
}
