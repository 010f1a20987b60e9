/// WAV encoder implementation using hound
use crate::error::Result;
use noisebed_core::{AudioEncoder as AudioEncoderTrait, SampleBuffer};
use std::path::Path;

/// WAV encoder writing 16-bit PCM mono
///
/// Samples are clamped to [-1.0, 1.0] before quantization, so a buffer that
/// was hard-clipped by the mixer serializes without wrapping artifacts.
pub struct WavEncoder;

impl WavEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self
    }

    fn encode_inner(buffer: &SampleBuffer, path: &Path) -> Result<()> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: buffer.sample_rate.as_hz(),
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::create(path, spec)?;
        for &sample in &buffer.samples {
            let quantized = (sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)).round() as i16;
            writer.write_sample(quantized)?;
        }
        writer.finalize()?;

        tracing::debug!(
            path = %path.display(),
            samples = buffer.len(),
            sample_rate = buffer.sample_rate.as_hz(),
            "wrote WAV file"
        );
        Ok(())
    }
}

impl Default for WavEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEncoderTrait for WavEncoder {
    fn encode(&self, buffer: &SampleBuffer, path: &Path) -> noisebed_core::Result<()> {
        Ok(Self::encode_inner(buffer, path)?)
    }
}
