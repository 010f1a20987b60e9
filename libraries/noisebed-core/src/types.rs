/// Audio-related types
use serde::{Deserialize, Serialize};

/// Sample rate in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleRate(pub u32);

impl SampleRate {
    /// Default rate for survey clip preparation (16 kHz)
    pub const SURVEY: Self = Self(16_000);
    /// CD quality (44.1 kHz)
    pub const CD_QUALITY: Self = Self(44_100);
    /// DVD quality (48 kHz)
    pub const DVD_QUALITY: Self = Self(48_000);

    /// Create a new sample rate
    #[must_use]
    pub fn new(hz: u32) -> Self {
        Self(hz)
    }

    /// Get the sample rate as Hz
    pub fn as_hz(&self) -> u32 {
        self.0
    }
}

/// Mono audio buffer containing decoded samples
///
/// Samples are stored as f32 in the nominal range [-1.0, 1.0]. The buffer is
/// always single-channel; multi-channel input must be downmixed before it is
/// wrapped in a `SampleBuffer`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Audio samples (f32, mono)
    pub samples: Vec<f32>,

    /// Sample rate of the samples
    pub sample_rate: SampleRate,
}

impl SampleBuffer {
    /// Create a new sample buffer
    pub fn new(samples: Vec<f32>, sample_rate: SampleRate) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Create an empty sample buffer with a given capacity
    pub fn with_capacity(capacity: usize, sample_rate: SampleRate) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            sample_rate,
        }
    }

    /// Get the length in samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.len() as f64 / f64::from(self.sample_rate.as_hz())
    }

    /// Get the maximum absolute sample value (0.0 for an empty buffer)
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0_f32, |max, &s| max.max(s.abs()))
    }

    /// Return a copy truncated to at most `len` samples
    pub fn truncated(&self, len: usize) -> Self {
        Self {
            samples: self.samples[..self.len().min(len)].to_vec(),
            sample_rate: self.sample_rate,
        }
    }

    /// Return a copy keeping only the first `max_secs` seconds
    pub fn trimmed_to_duration(&self, max_secs: f64) -> Self {
        let max_len = (f64::from(self.sample_rate.as_hz()) * max_secs) as usize;
        self.truncated(max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rate_common_values() {
        assert_eq!(SampleRate::SURVEY.as_hz(), 16_000);
        assert_eq!(SampleRate::CD_QUALITY.as_hz(), 44_100);
    }

    #[test]
    fn buffer_duration() {
        // 32000 samples at 16 kHz = 2 seconds
        let buffer = SampleBuffer::new(vec![0.0; 32_000], SampleRate::SURVEY);
        assert!((buffer.duration_secs() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn buffer_peak() {
        let buffer = SampleBuffer::new(vec![0.1, -0.7, 0.3], SampleRate::SURVEY);
        assert!((buffer.peak() - 0.7).abs() < 1e-6);

        let empty = SampleBuffer::new(vec![], SampleRate::SURVEY);
        assert_eq!(empty.peak(), 0.0);
    }

    #[test]
    fn buffer_truncated() {
        let buffer = SampleBuffer::new(vec![0.1, 0.2, 0.3], SampleRate::SURVEY);
        assert_eq!(buffer.truncated(2).samples, vec![0.1, 0.2]);
        // Truncating past the end is a no-op copy
        assert_eq!(buffer.truncated(10).samples, buffer.samples);
    }

    #[test]
    fn buffer_trimmed_to_duration() {
        let buffer = SampleBuffer::new(vec![0.0; 48_000], SampleRate::SURVEY);
        assert_eq!(buffer.trimmed_to_duration(1.0).len(), 16_000);
        assert_eq!(buffer.trimmed_to_duration(100.0).len(), 48_000);
    }
}
