//! Error types for the codec collaborators

use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors that can occur while decoding, resampling, or encoding
#[derive(Error, Debug)]
pub enum CodecError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Symphonia probe/format error
    #[error("Symphonia error: {0}")]
    Symphonia(String),

    /// Decode error
    #[error("Decode error: {0}")]
    Decode(String),

    /// Resampling error
    #[error("Resampling failed: {0}")]
    Resample(String),

    /// WAV encoding error
    #[error("Encode error: {0}")]
    Encode(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<hound::Error> for CodecError {
    fn from(err: hound::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

impl From<CodecError> for noisebed_core::NoisebedError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::FileNotFound(path) => Self::FileNotFound(path),
            CodecError::Symphonia(msg) | CodecError::Decode(msg) => Self::Decode(msg),
            CodecError::Resample(msg) => Self::Resample(msg),
            CodecError::Encode(msg) => Self::Encode(msg),
            CodecError::Io(err) => Self::Io(err),
        }
    }
}
