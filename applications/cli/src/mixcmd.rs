//! Mix a speech clip with a noise bed
//!
//! Decodes both inputs, resamples the noise to the speech rate (the engine
//! treats mismatched rates as a precondition violation), runs the mix, and
//! writes the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use noisebed_codec::{resample, SymphoniaDecoder, WavEncoder};
use noisebed_core::{AudioDecoder, AudioEncoder};
use noisebed_dsp::mix;

/// Options for the `mix` command
pub struct MixOptions {
    /// Speech audio file
    pub speech: PathBuf,
    /// Noise audio file
    pub noise: PathBuf,
    /// Speech target level in dBFS
    pub speech_level: f64,
    /// Noise target level in dBFS
    pub noise_level: f64,
    /// Loop crossfade duration in seconds
    pub crossfade: f64,
    /// Output WAV path
    pub out: PathBuf,
}

/// Run the mix command
pub fn run(opts: &MixOptions) -> Result<()> {
    let mut decoder = SymphoniaDecoder::new();

    let speech = decoder
        .decode(&opts.speech)
        .with_context(|| format!("cannot decode speech {}", opts.speech.display()))?;
    let noise = decoder
        .decode(&opts.noise)
        .with_context(|| format!("cannot decode noise {}", opts.noise.display()))?;
    let noise = resample(&noise, speech.sample_rate)?;

    let result = mix(
        &speech,
        &noise,
        opts.speech_level,
        opts.noise_level,
        opts.crossfade,
    )
    .map_err(noisebed_core::NoisebedError::from)?;

    WavEncoder::new().encode(&result.buffer, &opts.out)?;

    tracing::info!(
        out = %opts.out.display(),
        snr_db = result.snr_db,
        samples = result.buffer.len(),
        "wrote mixed clip"
    );
    println!(
        "{}: {} samples, SNR {:.1} dB",
        opts.out.display(),
        result.buffer.len(),
        result.snr_db
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use noisebed_core::{SampleBuffer, SampleRate};

    fn write_tone(path: &PathBuf, amplitude: f32, len: usize, rate: u32) {
        let samples = (0..len)
            .map(|i| amplitude * (2.0 * std::f32::consts::PI * 440.0 * i as f32 / rate as f32).sin())
            .collect();
        WavEncoder::new()
            .encode(&SampleBuffer::new(samples, SampleRate::new(rate)), path)
            .unwrap();
    }

    #[test]
    fn mix_end_to_end_loops_short_noise() {
        let dir = tempfile::tempdir().unwrap();
        let speech_path = dir.path().join("speech.wav");
        let noise_path = dir.path().join("noise.wav");
        let out_path = dir.path().join("mixed.wav");

        // 2 s speech, 0.5 s noise bed: the looper has to extend the bed
        write_tone(&speech_path, 0.4, 32_000, 16_000);
        write_tone(&noise_path, 0.3, 8_000, 16_000);

        run(&MixOptions {
            speech: speech_path,
            noise: noise_path,
            speech_level: -25.0,
            noise_level: -30.0,
            crossfade: 0.2,
            out: out_path.clone(),
        })
        .unwrap();

        let mixed = SymphoniaDecoder::new().decode(&out_path).unwrap();
        assert_eq!(mixed.len(), 32_000);
        assert!(mixed.peak() <= 1.0);
    }

    #[test]
    fn mix_resamples_noise_to_speech_rate() {
        let dir = tempfile::tempdir().unwrap();
        let speech_path = dir.path().join("speech.wav");
        let noise_path = dir.path().join("noise.wav");
        let out_path = dir.path().join("mixed.wav");

        write_tone(&speech_path, 0.4, 16_000, 16_000);
        write_tone(&noise_path, 0.3, 44_100, 44_100);

        run(&MixOptions {
            speech: speech_path,
            noise: noise_path,
            speech_level: -25.0,
            noise_level: -35.0,
            crossfade: 0.2,
            out: out_path.clone(),
        })
        .unwrap();

        let mixed = SymphoniaDecoder::new().decode(&out_path).unwrap();
        assert_eq!(mixed.sample_rate, SampleRate::SURVEY);
        assert_eq!(mixed.len(), 16_000);
    }
}
