//! noisebed core
//!
//! Platform-agnostic core types, traits, and error handling for noisebed.
//!
//! This crate provides the foundational building blocks shared by the signal
//! engine, the codec collaborators, and the batch tools:
//! - **Domain Types**: [`SampleBuffer`], [`SampleRate`]
//! - **Core Traits**: [`AudioDecoder`], [`AudioEncoder`]
//! - **Error Handling**: unified [`NoisebedError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use noisebed_core::{SampleBuffer, SampleRate};
//!
//! let buffer = SampleBuffer::new(vec![0.0; 16_000], SampleRate::SURVEY);
//! assert!((buffer.duration_secs() - 1.0).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{NoisebedError, Result};
pub use traits::{AudioDecoder, AudioEncoder};
pub use types::{SampleBuffer, SampleRate};
