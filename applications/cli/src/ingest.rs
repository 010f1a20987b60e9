//! Ingest raw category recordings
//!
//! For each `raw/<Category>/` directory: decode, downmix to mono, resample to
//! the survey rate, trim to the maximum duration, measure the original RMS
//! level, and write `<categoryKey>_<NN>.wav` into the category's output
//! directory. Finishes by writing the manifest.

use std::path::PathBuf;

use anyhow::{Context, Result};
use noisebed_codec::{resample, SymphoniaDecoder, WavEncoder};
use noisebed_core::{AudioDecoder, AudioEncoder, SampleRate};
use noisebed_dsp::measure_dbfs;

use crate::discovery;
use crate::manifest::{self, ManifestEntry};

/// Options for the `ingest` command
pub struct IngestOptions {
    /// Directory containing raw/<Category>/ recordings
    pub raw_dir: PathBuf,
    /// Output root for per-category directories and the manifest
    pub out_dir: PathBuf,
    /// Target sample rate in Hz
    pub sample_rate: u32,
    /// Maximum clip duration in seconds
    pub max_duration: f64,
    /// Maximum number of clips per category
    pub samples_per_category: usize,
}

/// Round to two decimals, as recorded in the manifest
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Run the ingest over every category directory
pub fn run(opts: &IngestOptions) -> Result<()> {
    let categories = discovery::list_categories(&opts.raw_dir)?;
    if categories.is_empty() {
        tracing::warn!(raw_dir = %opts.raw_dir.display(), "no category directories found");
    }

    let target_rate = SampleRate::new(opts.sample_rate);
    let mut decoder = SymphoniaDecoder::new();
    let encoder = WavEncoder::new();
    let mut entries: Vec<ManifestEntry> = Vec::new();

    for category in &categories {
        let raw_cat = opts.raw_dir.join(category);
        let mut files = discovery::audio_files(&raw_cat)?;
        files.truncate(opts.samples_per_category);

        if files.len() < opts.samples_per_category {
            tracing::warn!(
                category = %category,
                found = files.len(),
                expected = opts.samples_per_category,
                "fewer recordings than expected"
            );
        }

        let out_cat = opts.out_dir.join(category);
        std::fs::create_dir_all(&out_cat)
            .with_context(|| format!("cannot create {}", out_cat.display()))?;
        let ckey = discovery::category_key(category);

        for (idx, path) in files.iter().enumerate() {
            let sample_id = format!("{:02}", idx + 1);

            let decoded = match decoder.decode(path) {
                Ok(buffer) => buffer,
                Err(err) => {
                    tracing::error!(path = %path.display(), %err, "skipping unreadable file");
                    continue;
                }
            };

            let resampled = resample(&decoded, target_rate)?;
            let clip = resampled.trimmed_to_duration(opts.max_duration);
            let db = measure_dbfs(&clip);

            let out_name = format!("{ckey}_{sample_id}.wav");
            let out_path = out_cat.join(&out_name);
            encoder.encode(&clip, &out_path)?;

            tracing::info!(
                category = %category,
                sample_id = %sample_id,
                file = %out_name,
                original_rms_db = round2(db),
                duration_sec = round2(clip.duration_secs()),
                "ingested clip"
            );

            entries.push(ManifestEntry {
                category: category.clone(),
                sample_id,
                filename: out_name,
                original_rms_db: round2(db),
                duration_sec: round2(clip.duration_secs()),
                path: out_path,
            });
        }
    }

    let manifest_path = opts.out_dir.join(manifest::MANIFEST_FILENAME);
    manifest::write(&manifest_path, &entries)?;
    tracing::info!(
        manifest = %manifest_path.display(),
        entries = entries.len(),
        "wrote manifest"
    );
    Ok(())
}
