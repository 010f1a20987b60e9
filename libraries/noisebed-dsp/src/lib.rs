//! Level normalization and noise/speech mixing for noisebed
//!
//! This crate provides:
//! - RMS loudness measurement (dBFS)
//! - Level normalization to a target dBFS with a peak-limiting fallback
//! - Crossfaded loop synthesis for extending short noise clips
//! - Speech/noise mixing at a controlled signal-to-noise ratio
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ Speech     │ ──► │  Normalizer  │ ─┐  │               │
//! └────────────┘     └──────────────┘  ├─►│     Mixer     │ ──► MixResult
//! ┌────────────┐     ┌──────────────┐  │  │               │
//! │ Noise      │ ──► │  Normalizer  │ ─┤  └───────────────┘
//! └────────────┘     └──────┬───────┘  │
//!                           ▼          │
//!                    ┌──────────────┐  │
//!                    │    Looper    │ ─┘   (when noise < speech)
//!                    └──────────────┘
//! ```
//!
//! All operations are pure functions over caller-owned buffers; the engine
//! holds no state between calls and is safe to invoke from parallel workers.
//!
//! # Example
//!
//! ```
//! use noisebed_core::{SampleBuffer, SampleRate};
//! use noisebed_dsp::{measure_dbfs, mix, normalize_to_level};
//!
//! let speech = SampleBuffer::new(vec![0.1; 32_000], SampleRate::SURVEY);
//! let noise = SampleBuffer::new(vec![0.05; 8_000], SampleRate::SURVEY);
//!
//! let result = mix(&speech, &noise, -25.0, -35.0, 0.2).unwrap();
//! assert_eq!(result.buffer.len(), speech.len());
//! assert_eq!(result.snr_db, 10.0);
//!
//! let leveled = normalize_to_level(&speech, -25.0);
//! assert!((measure_dbfs(&leveled) - (-25.0)).abs() < 0.1);
//! ```

#![deny(unsafe_code)]

mod error;
mod looper;
mod loudness;
mod mixer;
mod normalizer;

pub use error::{DspError, Result};
pub use looper::extend_with_crossfade;
pub use loudness::{measure_dbfs, rms};
pub use mixer::{mix, MixResult};
pub use normalizer::normalize_to_level;

/// Peak ceiling applied after RMS scaling (linear amplitude)
pub const CLIP_THRESHOLD: f32 = 0.99;

/// Default loop crossfade duration in seconds
pub const DEFAULT_CROSSFADE_SECS: f64 = 0.2;
