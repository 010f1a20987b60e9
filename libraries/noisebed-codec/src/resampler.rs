//! Offline resampling via rubato
//!
//! Whole-clip resampling for batch preparation: the clip is pushed through a
//! sinc resampler in fixed-size chunks, with a zero-padded partial chunk at
//! the end so no input frames are dropped.

use crate::error::{CodecError, Result};
use noisebed_core::{SampleBuffer, SampleRate};
use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

/// Chunk size fed to the resampler per call
const CHUNK_SIZE: usize = 1024;

/// Resample a mono buffer to `target_rate`
///
/// Identity rates (and empty buffers) pass through without touching the
/// samples. The output length is approximately `input_len * target / source`;
/// the sinc filter's startup transient and final zero-padded chunk make it
/// inexact, which is fine for clip preparation where the trim to a maximum
/// duration happens afterwards.
pub fn resample(buffer: &SampleBuffer, target_rate: SampleRate) -> Result<SampleBuffer> {
    if buffer.sample_rate == target_rate {
        return Ok(buffer.clone());
    }
    if buffer.is_empty() {
        return Ok(SampleBuffer::new(Vec::new(), target_rate));
    }

    let ratio = f64::from(target_rate.as_hz()) / f64::from(buffer.sample_rate.as_hz());

    let params = SincInterpolationParameters {
        sinc_len: 128,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Cubic,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris,
    };

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, CHUNK_SIZE, 1)
        .map_err(|e| CodecError::Resample(format!("SincFixedIn creation failed: {}", e)))?;

    let expected = (buffer.len() as f64 * ratio) as usize;
    let mut output: Vec<f32> = Vec::with_capacity(expected + CHUNK_SIZE);

    let samples = &buffer.samples;
    let mut pos = 0;
    while pos + CHUNK_SIZE <= samples.len() {
        let chunk = vec![samples[pos..pos + CHUNK_SIZE].to_vec()];
        let resampled = resampler
            .process(&chunk, None)
            .map_err(|e| CodecError::Resample(e.to_string()))?;
        output.extend_from_slice(&resampled[0]);
        pos += CHUNK_SIZE;
    }

    if pos < samples.len() {
        let tail = vec![samples[pos..].to_vec()];
        let resampled = resampler
            .process_partial(Some(&tail), None)
            .map_err(|e| CodecError::Resample(e.to_string()))?;
        output.extend_from_slice(&resampled[0]);
    }

    // Flush whatever the filter still holds
    let flushed = resampler
        .process_partial::<Vec<f32>>(None, None)
        .map_err(|e| CodecError::Resample(e.to_string()))?;
    output.extend_from_slice(&flushed[0]);

    tracing::debug!(
        from = buffer.sample_rate.as_hz(),
        to = target_rate.as_hz(),
        in_len = buffer.len(),
        out_len = output.len(),
        "resampled buffer"
    );

    Ok(SampleBuffer::new(output, target_rate))
}
