//! Category and audio file discovery
//!
//! Selecting input files is plain naming-convention matching (directory per
//! category, known audio extensions, sorted order) and deliberately lives
//! here, outside the signal engine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Extensions accepted as raw input recordings
pub const AUDIO_EXTENSIONS: [&str; 4] = ["wav", "mp3", "flac", "ogg"];

/// Category dir name -> lowercase key for filenames (e.g. Office -> office)
pub fn category_key(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// List category subdirectories of `raw_dir`, sorted by name
pub fn list_categories(raw_dir: &Path) -> Result<Vec<String>> {
    let mut categories = Vec::new();
    let entries = std::fs::read_dir(raw_dir)
        .with_context(|| format!("cannot read raw dir {}", raw_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                categories.push(name.to_string());
            }
        }
    }
    categories.sort();
    Ok(categories)
}

/// List audio files in `dir` with a supported extension, sorted by name
pub fn audio_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("cannot read dir {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
