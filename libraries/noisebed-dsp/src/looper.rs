//! Crossfaded loop synthesis
//!
//! Extends a short clip to an arbitrary target length by repeating it, with a
//! linear crossfade at each loop seam so plain-concatenation clicks never make
//! it into the output. Sources too short to crossfade fall back to plain
//! tiling; that degraded mode accepts the click risk.

use crate::error::{DspError, Result};
use noisebed_core::SampleBuffer;

/// Produce a buffer of exactly `target_len` samples by looping `source`
///
/// - A source at least `target_len` long is truncated and returned unchanged;
///   no crossfade is applied when no looping occurs.
/// - The crossfade length is `round(crossfade_seconds * sample_rate)`, clamped
///   to half the source length and to at least one sample. A one-sample source
///   cannot be crossfaded and is plain-tiled instead.
/// - Each loop iteration fades the trailing crossfade window of the output
///   down 1→0 while fading the head of the next copy up 0→1, sums them in
///   place, then appends the rest of the copy, truncating on overshoot.
///
/// Every iteration advances by `source_len - crossfade` (at least one sample
/// given the clamps), so the loop always terminates.
///
/// # Errors
/// Returns [`DspError::EmptySource`] when the source is empty and looping
/// would be required to reach the target length.
pub fn extend_with_crossfade(
    source: &SampleBuffer,
    target_len: usize,
    crossfade_seconds: f64,
) -> Result<SampleBuffer> {
    if source.len() >= target_len {
        return Ok(source.truncated(target_len));
    }
    if source.is_empty() {
        return Err(DspError::EmptySource { target: target_len });
    }

    let src = &source.samples;
    let cf = crossfade_samples(crossfade_seconds, source.sample_rate.as_hz(), src.len());
    if cf == 0 {
        tracing::debug!(
            source_len = src.len(),
            target_len,
            "source too short to crossfade, tiling"
        );
        return Ok(tile(source, target_len));
    }

    let mut out: Vec<f32> = Vec::with_capacity(target_len);
    out.extend_from_slice(src);

    while out.len() < target_len {
        // Blend the trailing cf samples already written with the head of the
        // next copy: existing tail ramps 1->0, incoming head ramps 0->1.
        let seam = out.len() - cf;
        for i in 0..cf {
            let w = i as f32 / cf as f32;
            out[seam + i] = out[seam + i] * (1.0 - w) + src[i] * w;
        }

        let remaining = target_len - out.len();
        let tail = &src[cf..];
        if tail.len() <= remaining {
            out.extend_from_slice(tail);
        } else {
            out.extend_from_slice(&tail[..remaining]);
        }
    }

    Ok(SampleBuffer::new(out, source.sample_rate))
}

/// Crossfade length in samples for a given source
///
/// Zero means the source cannot be crossfaded at all.
fn crossfade_samples(seconds: f64, sample_rate: u32, source_len: usize) -> usize {
    if source_len < 2 {
        return 0;
    }
    let cf = (seconds * f64::from(sample_rate)).round() as usize;
    cf.clamp(1, source_len / 2)
}

/// Plain repeat-and-truncate, no seam treatment
fn tile(source: &SampleBuffer, target_len: usize) -> SampleBuffer {
    let mut out: Vec<f32> = Vec::with_capacity(target_len);
    while out.len() < target_len {
        let take = (target_len - out.len()).min(source.len());
        out.extend_from_slice(&source.samples[..take]);
    }
    SampleBuffer::new(out, source.sample_rate)
}
