/// Audio decoder implementation using Symphonia
use crate::error::{CodecError, Result};
use noisebed_core::{AudioDecoder as AudioDecoderTrait, SampleBuffer, SampleRate};
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Audio decoder using Symphonia
///
/// Supports: WAV, MP3, FLAC, OGG
///
/// Output is always a mono `SampleBuffer` at the file's native sample rate;
/// multi-channel input is downmixed by taking the per-frame mean across
/// channels, so no channel dominates the loudness measurement downstream.
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }

    /// Convert a Symphonia audio buffer to mono f32 samples
    ///
    /// Uses symmetric scaling for signed integers (divide by 2^(N-1), not
    /// 2^(N-1)-1) so the [-1.0, 1.0] range is symmetric.
    fn convert_buffer(decoded: &AudioBufferRef) -> Vec<f32> {
        match decoded {
            AudioBufferRef::F32(buf) => Self::downmix_to_mono(buf, |s| s),
            AudioBufferRef::F64(buf) => Self::downmix_to_mono(buf, |s| s as f32),
            AudioBufferRef::S32(buf) => Self::downmix_to_mono(buf, |s| s as f32 / 2147483648.0),
            AudioBufferRef::S16(buf) => Self::downmix_to_mono(buf, |s| f32::from(s) / 32768.0),
            AudioBufferRef::S8(buf) => Self::downmix_to_mono(buf, |s| f32::from(s) / 128.0),
            AudioBufferRef::U32(buf) => {
                Self::downmix_to_mono(buf, |s| (s as f32 / u32::MAX as f32) * 2.0 - 1.0)
            }
            AudioBufferRef::U16(buf) => {
                Self::downmix_to_mono(buf, |s| (f32::from(s) / f32::from(u16::MAX)) * 2.0 - 1.0)
            }
            AudioBufferRef::U8(buf) => {
                Self::downmix_to_mono(buf, |s| (f32::from(s) / f32::from(u8::MAX)) * 2.0 - 1.0)
            }
            AudioBufferRef::U24(buf) => {
                Self::downmix_to_mono(buf, |s| (s.inner() as f32 / 16777215.0) * 2.0 - 1.0)
            }
            AudioBufferRef::S24(buf) => {
                Self::downmix_to_mono(buf, |s| s.inner() as f32 / 8388608.0)
            }
        }
    }

    /// Downmix planar multi-channel audio to mono by per-frame mean
    fn downmix_to_mono<S, F>(
        buf: &symphonia::core::audio::AudioBuffer<S>,
        convert: F,
    ) -> Vec<f32>
    where
        S: symphonia::core::sample::Sample + Copy,
        F: Fn(S) -> f32,
    {
        let frames = buf.frames();
        let channels = buf.spec().channels.count();
        let mut output = vec![0.0_f32; frames];
        if channels == 0 {
            return output;
        }

        for ch in 0..channels {
            let plane = buf.chan(ch);
            for (out, &sample) in output.iter_mut().zip(plane) {
                *out += convert(sample);
            }
        }

        let inverse = 1.0 / channels as f32;
        for out in &mut output {
            *out *= inverse;
        }
        output
    }

    fn decode_inner(path: &Path) -> Result<SampleBuffer> {
        if !path.exists() {
            return Err(CodecError::FileNotFound(path.display().to_string()));
        }

        let file = std::fs::File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        // A hint helps the format registry guess the container
        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| CodecError::Symphonia(format!("Failed to probe file: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| CodecError::Decode("No audio tracks found".to_string()))?;

        let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);
        let track_id = track.id;

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| CodecError::Symphonia(format!("Failed to create decoder: {}", e)))?;

        let mut all_samples = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(symphonia::core::errors::Error::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(CodecError::Decode(format!("Error reading packet: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = decoder
                .decode(&packet)
                .map_err(|e| CodecError::Decode(format!("Decode error: {}", e)))?;

            all_samples.extend_from_slice(&Self::convert_buffer(&decoded));
        }

        tracing::debug!(
            path = %path.display(),
            samples = all_samples.len(),
            sample_rate,
            "decoded audio file"
        );

        Ok(SampleBuffer::new(all_samples, SampleRate::new(sample_rate)))
    }
}

impl Default for SymphoniaDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDecoderTrait for SymphoniaDecoder {
    fn decode(&mut self, path: &Path) -> noisebed_core::Result<SampleBuffer> {
        Ok(Self::decode_inner(path)?)
    }

    fn supports_format(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            matches!(ext.to_lowercase().as_str(), "wav" | "mp3" | "flac" | "ogg")
        } else {
            false
        }
    }
}
