//! Generate level-normalized variants
//!
//! Each manifest entry expands into one WAV per target level, named
//! `<categoryKey>_<NN>_level_<db>db.wav` alongside the source clip. Entries
//! are independent work units with no ordering dependency, so they fan out
//! across a rayon worker pool.

use std::path::Path;

use anyhow::{Context, Result};
use noisebed_codec::{SymphoniaDecoder, WavEncoder};
use noisebed_core::{AudioDecoder, AudioEncoder};
use noisebed_dsp::normalize_to_level;
use rayon::prelude::*;

use crate::discovery;
use crate::manifest::{self, ManifestEntry};

/// Run level generation for every entry in the manifest
pub fn run(manifest_path: &Path, levels: &[i32]) -> Result<()> {
    let entries = manifest::read(manifest_path)?;
    if entries.is_empty() {
        tracing::warn!(
            manifest = %manifest_path.display(),
            "manifest is empty, run ingest first"
        );
        return Ok(());
    }

    entries
        .par_iter()
        .try_for_each(|entry| generate_for_entry(entry, levels))?;

    tracing::info!(
        entries = entries.len(),
        levels = levels.len(),
        "level generation complete"
    );
    Ok(())
}

fn generate_for_entry(entry: &ManifestEntry, levels: &[i32]) -> Result<()> {
    let mut decoder = SymphoniaDecoder::new();
    let encoder = WavEncoder::new();

    let clip = decoder
        .decode(&entry.path)
        .with_context(|| format!("cannot decode {}", entry.path.display()))?;

    let out_dir = entry
        .path
        .parent()
        .with_context(|| format!("clip {} has no parent dir", entry.path.display()))?;
    let ckey = discovery::category_key(&entry.category);

    for &target_db in levels {
        let leveled = normalize_to_level(&clip, f64::from(target_db));
        let out_name = format!("{ckey}_{}_level_{target_db}db.wav", entry.sample_id);
        encoder.encode(&leveled, &out_dir.join(&out_name))?;
    }

    tracing::info!(
        category = %entry.category,
        sample_id = %entry.sample_id,
        count = levels.len(),
        "wrote level files"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use noisebed_core::{SampleBuffer, SampleRate};
    use noisebed_dsp::measure_dbfs;
    use std::path::PathBuf;

    #[test]
    fn levels_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let cat_dir = dir.path().join("Office");
        std::fs::create_dir_all(&cat_dir).unwrap();

        let samples = (0..16_000)
            .map(|i| 0.3 * (2.0 * std::f32::consts::PI * 440.0 * i as f32 / 16_000.0).sin())
            .collect();
        let clip_path = cat_dir.join("office_01.wav");
        WavEncoder::new()
            .encode(&SampleBuffer::new(samples, SampleRate::SURVEY), &clip_path)
            .unwrap();

        let manifest_path = dir.path().join(manifest::MANIFEST_FILENAME);
        manifest::write(
            &manifest_path,
            &[ManifestEntry {
                category: "Office".to_string(),
                sample_id: "01".to_string(),
                filename: "office_01.wav".to_string(),
                original_rms_db: -13.5,
                duration_sec: 1.0,
                path: clip_path,
            }],
        )
        .unwrap();

        run(&manifest_path, &[-40, -20]).unwrap();

        for (name, target) in [
            ("office_01_level_-40db.wav", -40.0),
            ("office_01_level_-20db.wav", -20.0),
        ] {
            let path: PathBuf = cat_dir.join(name);
            assert!(path.exists(), "{name} missing");
            let leveled = SymphoniaDecoder::new().decode(&path).unwrap();
            // 16-bit quantization costs a little precision at -40 dBFS
            assert!(
                (measure_dbfs(&leveled) - target).abs() < 0.5,
                "{name}: {:.2}",
                measure_dbfs(&leveled)
            );
        }
    }
}
