//! Manifest of ingested clips
//!
//! One entry per prepared clip, written as JSON next to the category
//! directories. The `levels` command consumes this to know what to generate.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default manifest filename
pub const MANIFEST_FILENAME: &str = "manifest_original.json";

/// One ingested clip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Category directory name (e.g. "Office")
    pub category: String,
    /// Zero-padded sample id within the category (e.g. "01")
    pub sample_id: String,
    /// Output filename (e.g. "office_01.wav")
    pub filename: String,
    /// RMS level of the prepared clip in dBFS, rounded to 2 decimals
    pub original_rms_db: f64,
    /// Clip duration in seconds, rounded to 2 decimals
    pub duration_sec: f64,
    /// Full path of the prepared clip
    pub path: PathBuf,
}

/// Write manifest entries as pretty-printed JSON
pub fn write(path: &Path, entries: &[ManifestEntry]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create manifest {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), entries)?;
    Ok(())
}

/// Read manifest entries from JSON
pub fn read(path: &Path) -> Result<Vec<ManifestEntry>> {
    let file =
        File::open(path).with_context(|| format!("cannot open manifest {}", path.display()))?;
    let entries = serde_json::from_reader(BufReader::new(file))?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILENAME);

        let entries = vec![ManifestEntry {
            category: "Office".to_string(),
            sample_id: "01".to_string(),
            filename: "office_01.wav".to_string(),
            original_rms_db: -31.42,
            duration_sec: 12.5,
            path: dir.path().join("Office/office_01.wav"),
        }];

        write(&path, &entries).unwrap();
        let back = read(&path).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].category, "Office");
        assert_eq!(back[0].original_rms_db, -31.42);
    }
}
