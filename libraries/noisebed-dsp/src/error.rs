//! Error types for the signal engine

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, DspError>;

/// Errors that can occur in the signal engine
///
/// Both variants are precondition violations on the caller's side; all numeric
/// edge cases (silence, log of zero, near-zero scale divisors) are handled
/// internally and never raise.
#[derive(Error, Debug)]
pub enum DspError {
    /// A loop extension was requested from an empty source buffer
    #[error("cannot extend an empty source buffer to {target} samples")]
    EmptySource {
        /// Requested output length in samples
        target: usize,
    },

    /// Speech and noise buffers have different sample rates
    #[error("sample rate mismatch: speech {speech} Hz, noise {noise} Hz")]
    SampleRateMismatch {
        /// Speech buffer rate in Hz
        speech: u32,
        /// Noise buffer rate in Hz
        noise: u32,
    },
}

impl From<DspError> for noisebed_core::NoisebedError {
    fn from(err: DspError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
