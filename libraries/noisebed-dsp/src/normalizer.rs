//! Level normalization with a peak-limiting fallback
//!
//! Rescales a buffer so its RMS matches a target dBFS. When the rescaled
//! signal would clip, the whole buffer is attenuated uniformly so the peak
//! lands exactly on [`CLIP_THRESHOLD`](crate::CLIP_THRESHOLD); relative
//! dynamics are preserved and the RMS target is undershot for signals with a
//! high crest factor. That undershoot is expected behavior, not a defect.

use crate::loudness::rms;
use crate::CLIP_THRESHOLD;
use noisebed_core::SampleBuffer;

/// Scale the buffer so its RMS equals `10^(target_dbfs / 20)`
///
/// A silent buffer (RMS <= 0) is returned unchanged: silence cannot be scaled
/// to a nonzero target without amplifying quantization noise, so the no-op is
/// deliberate. Output length always equals input length and the output peak
/// never exceeds the clip threshold.
pub fn normalize_to_level(buffer: &SampleBuffer, target_dbfs: f64) -> SampleBuffer {
    let current_rms = rms(&buffer.samples);
    if current_rms <= 0.0 {
        tracing::debug!(target_dbfs, "silent input, normalization skipped");
        return buffer.clone();
    }

    let target_rms = 10.0_f64.powf(target_dbfs / 20.0);
    let scale = target_rms / (current_rms + f64::EPSILON);

    let mut samples: Vec<f32> = buffer
        .samples
        .iter()
        .map(|&s| (f64::from(s) * scale) as f32)
        .collect();

    let peak = samples.iter().fold(0.0_f32, |max, &s| max.max(s.abs()));
    if peak > CLIP_THRESHOLD {
        tracing::debug!(target_dbfs, peak, "peak limiting after normalization");
        let attenuation = peak / CLIP_THRESHOLD;
        for sample in &mut samples {
            *sample /= attenuation;
        }
    }

    SampleBuffer::new(samples, buffer.sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loudness::measure_dbfs;
    use noisebed_core::SampleRate;

    fn sine(amplitude: f32, len: usize) -> SampleBuffer {
        let samples = (0..len)
            .map(|i| {
                let t = i as f32 / 16_000.0;
                amplitude * (2.0 * std::f32::consts::PI * 440.0 * t).sin()
            })
            .collect();
        SampleBuffer::new(samples, SampleRate::SURVEY)
    }

    #[test]
    fn reaches_target_level() {
        let buffer = sine(0.3, 32_000);
        for target in [-40.0, -30.0, -20.0, -10.0] {
            let out = normalize_to_level(&buffer, target);
            assert_eq!(out.len(), buffer.len());
            assert!(
                (measure_dbfs(&out) - target).abs() < 0.05,
                "target {target}, got {:.3}",
                measure_dbfs(&out)
            );
        }
    }

    #[test]
    fn silence_is_identity() {
        let buffer = SampleBuffer::new(vec![0.0; 4096], SampleRate::SURVEY);
        let out = normalize_to_level(&buffer, -20.0);
        assert_eq!(out, buffer);
    }

    #[test]
    fn empty_is_identity() {
        let buffer = SampleBuffer::new(vec![], SampleRate::SURVEY);
        let out = normalize_to_level(&buffer, -20.0);
        assert!(out.is_empty());
    }

    #[test]
    fn peak_limit_caps_high_crest_signals() {
        // Mostly near-silence with one spike: scaling the RMS up to -3 dBFS
        // would push the spike far past full scale.
        let mut samples = vec![0.001_f32; 16_000];
        samples[8_000] = 1.0;
        let buffer = SampleBuffer::new(samples, SampleRate::SURVEY);

        let out = normalize_to_level(&buffer, -3.0);
        let peak = out.peak();
        assert!((peak - CLIP_THRESHOLD).abs() < 1e-4, "peak {peak}");
        // RMS undershoots the target when the limiter fires
        assert!(measure_dbfs(&out) < -3.0);
    }

    #[test]
    fn amplifies_and_attenuates() {
        let quiet = sine(0.01, 16_000);
        let louder = normalize_to_level(&quiet, -10.0);
        assert!(louder.peak() > quiet.peak());

        let loud = sine(0.9, 16_000);
        let quieter = normalize_to_level(&loud, -40.0);
        assert!(quieter.peak() < loud.peak());
    }
}
