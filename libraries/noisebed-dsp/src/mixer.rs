//! Speech/noise mixing at a controlled SNR
//!
//! Both inputs are level-normalized independently, the noise bed is looped or
//! truncated to the speech length, and the two are summed with a saturating
//! clip. The reported SNR is the difference of the requested target levels,
//! not a measurement of the final mix, so it stays deterministic and
//! comparable across clips even when the sum clips at the extremes.

use crate::error::{DspError, Result};
use crate::looper::extend_with_crossfade;
use crate::normalizer::normalize_to_level;
use noisebed_core::SampleBuffer;

/// Result of mixing a speech buffer with a noise bed
#[derive(Debug, Clone)]
pub struct MixResult {
    /// The mixed signal, exactly as long as the speech input
    pub buffer: SampleBuffer,

    /// Realized SNR in dB: speech target level minus noise target level
    pub snr_db: f64,
}

/// Mix a speech buffer with a noise buffer at the given target levels
///
/// Speech is normalized to `speech_target_dbfs` and noise to
/// `noise_target_dbfs`. Noise shorter than the speech is extended with
/// crossfaded looping (`crossfade_seconds` per seam); longer noise is
/// truncated. The sum is hard-clipped to [-1.0, 1.0] rather than rescaled,
/// since both inputs were already level-controlled.
///
/// # Errors
/// - [`DspError::SampleRateMismatch`] when the buffers disagree on sample
///   rate; resampling is the caller's responsibility.
/// - [`DspError::EmptySource`] when the noise buffer is empty but the speech
///   buffer is not.
pub fn mix(
    speech: &SampleBuffer,
    noise: &SampleBuffer,
    speech_target_dbfs: f64,
    noise_target_dbfs: f64,
    crossfade_seconds: f64,
) -> Result<MixResult> {
    if speech.sample_rate != noise.sample_rate {
        return Err(DspError::SampleRateMismatch {
            speech: speech.sample_rate.as_hz(),
            noise: noise.sample_rate.as_hz(),
        });
    }

    let speech = normalize_to_level(speech, speech_target_dbfs);
    let noise = normalize_to_level(noise, noise_target_dbfs);

    let noise = if noise.len() < speech.len() {
        extend_with_crossfade(&noise, speech.len(), crossfade_seconds)?
    } else {
        noise.truncated(speech.len())
    };

    let samples: Vec<f32> = speech
        .samples
        .iter()
        .zip(&noise.samples)
        .map(|(&s, &n)| (s + n).clamp(-1.0, 1.0))
        .collect();

    Ok(MixResult {
        buffer: SampleBuffer::new(samples, speech.sample_rate),
        snr_db: speech_target_dbfs - noise_target_dbfs,
    })
}
