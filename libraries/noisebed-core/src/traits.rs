/// Core traits for noisebed
use crate::error::Result;
use crate::types::SampleBuffer;
use std::path::Path;

/// Audio decoder trait
///
/// Implementers decode audio files into mono [`SampleBuffer`]s at the file's
/// native sample rate. Resampling to a target rate is a separate step.
pub trait AudioDecoder: Send {
    /// Decode an audio file from the given path (loads the entire file)
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded
    fn decode(&mut self, path: &Path) -> Result<SampleBuffer>;

    /// Check if the decoder supports the given file format
    fn supports_format(&self, path: &Path) -> bool;
}

/// Audio encoder trait
///
/// Implementers serialize a [`SampleBuffer`] to a container format on disk.
pub trait AudioEncoder: Send {
    /// Write the buffer to the given path
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written
    fn encode(&self, buffer: &SampleBuffer, path: &Path) -> Result<()>;
}
