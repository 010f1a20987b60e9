//! RMS loudness measurement
//!
//! Loudness here is plain RMS energy expressed in dB relative to full scale
//! (dBFS). There is no perceptual weighting; a 0 dBFS square wave and a
//! 0 dBFS sine measure differently because their RMS differs.

use noisebed_core::SampleBuffer;

/// RMS amplitude of the samples (linear, not dB)
///
/// Accumulates in f64 regardless of buffer length. Returns 0.0 for an empty
/// slice.
pub fn rms(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// RMS level of the buffer in dBFS
///
/// Computed as `20 * log10(rms + EPSILON)`; the epsilon guard keeps a silent
/// (but non-empty) buffer finite at roughly -313 dBFS instead of -inf, without
/// measurably biasing non-silent signals. A zero-length buffer has no defined
/// mean and returns negative infinity.
pub fn measure_dbfs(buffer: &SampleBuffer) -> f64 {
    if buffer.is_empty() {
        return f64::NEG_INFINITY;
    }
    20.0 * (rms(&buffer.samples) + f64::EPSILON).log10()
}
