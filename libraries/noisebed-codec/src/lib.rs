//! noisebed codec collaborators
//!
//! Everything that turns files into engine-ready [`SampleBuffer`]s and back:
//! - Audio decoding via Symphonia (WAV, MP3, FLAC, OGG), downmixed to mono
//! - Offline resampling via rubato
//! - WAV encoding via hound (16-bit PCM mono)
//!
//! The engine itself (`noisebed-dsp`) never touches files or sample formats;
//! buffers pass through this crate on the way in and out.
//!
//! [`SampleBuffer`]: noisebed_core::SampleBuffer

#![deny(unsafe_code)]

mod decoder;
mod encoder;
mod error;
mod resampler;

pub use decoder::SymphoniaDecoder;
pub use encoder::WavEncoder;
pub use error::{CodecError, Result};
pub use resampler::resample;
