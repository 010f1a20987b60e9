/// Core error types for noisebed
use thiserror::Error;

/// Result type alias using `NoisebedError`
pub type Result<T> = std::result::Result<T, NoisebedError>;

/// Core error type for noisebed
#[derive(Error, Debug)]
pub enum NoisebedError {
    /// Audio decoding errors
    #[error("Decode error: {0}")]
    Decode(String),

    /// Audio encoding errors
    #[error("Encode error: {0}")]
    Encode(String),

    /// Resampling errors
    #[error("Resample error: {0}")]
    Resample(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl NoisebedError {
    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create an encode error
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Create a resample error
    pub fn resample(msg: impl Into<String>) -> Self {
        Self::Resample(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
