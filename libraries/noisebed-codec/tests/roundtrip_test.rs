//! Integration tests for the codec collaborators
//!
//! Exercises the encode -> decode path on real files in a temp directory.

use noisebed_codec::{resample, SymphoniaDecoder, WavEncoder};
use noisebed_core::{AudioDecoder, AudioEncoder, SampleBuffer, SampleRate};

fn sine(amplitude: f32, len: usize, rate: u32) -> SampleBuffer {
    let samples = (0..len)
        .map(|i| {
            let t = i as f32 / rate as f32;
            amplitude * (2.0 * std::f32::consts::PI * 440.0 * t).sin()
        })
        .collect();
    SampleBuffer::new(samples, SampleRate::new(rate))
}

#[test]
fn wav_roundtrip_preserves_signal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tone.wav");

    let original = sine(0.5, 16_000, 16_000);
    WavEncoder::new().encode(&original, &path).unwrap();

    let decoded = SymphoniaDecoder::new().decode(&path).unwrap();
    assert_eq!(decoded.sample_rate, original.sample_rate);
    assert_eq!(decoded.len(), original.len());

    // 16-bit quantization plus the 32767/32768 scaling asymmetry
    for (a, b) in original.samples.iter().zip(&decoded.samples) {
        assert!((a - b).abs() < 1e-3, "{a} vs {b}");
    }
}

#[test]
fn wav_roundtrip_of_clipped_mix_stays_in_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hot.wav");

    // Samples right at the rails survive quantization without wrapping
    let buffer = SampleBuffer::new(vec![1.0, -1.0, 0.999, -0.999], SampleRate::SURVEY);
    WavEncoder::new().encode(&buffer, &path).unwrap();

    let decoded = SymphoniaDecoder::new().decode(&path).unwrap();
    assert!(decoded.peak() <= 1.0);
    assert!(decoded.samples[0] > 0.99 && decoded.samples[1] < -0.99);
}

#[test]
fn decode_then_resample_to_survey_rate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cd_rate.wav");

    let original = sine(0.4, 44_100, 44_100);
    WavEncoder::new().encode(&original, &path).unwrap();

    let decoded = SymphoniaDecoder::new().decode(&path).unwrap();
    let resampled = resample(&decoded, SampleRate::SURVEY).unwrap();

    assert_eq!(resampled.sample_rate, SampleRate::SURVEY);
    let expected = 16_000.0;
    assert!(
        (resampled.len() as f64 - expected).abs() < expected * 0.05,
        "got {}",
        resampled.len()
    );
}
