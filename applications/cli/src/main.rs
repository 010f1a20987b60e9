//! noisebed batch tool
//!
//! Prepares level-controlled background-noise survey clips:
//! - `ingest`: decode raw category recordings, downmix/resample/trim them,
//!   and write a manifest
//! - `levels`: generate level-normalized variants of every manifest entry
//! - `mix`: combine a speech clip with a noise bed at target levels

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod discovery;
mod ingest;
mod levels;
mod manifest;
mod mixcmd;

/// Default sample rate for survey clips (Hz)
const DEFAULT_SAMPLE_RATE: u32 = 16_000;

/// Default maximum clip duration (seconds)
const DEFAULT_MAX_DURATION_SEC: f64 = 100.0;

/// Default number of clips kept per category
const DEFAULT_SAMPLES_PER_CATEGORY: usize = 5;

#[derive(Parser)]
#[command(name = "noisebed", version, about = "Background-noise survey clip preparation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode raw recordings into trimmed mono clips and write the manifest
    Ingest {
        /// Directory containing raw/<Category>/ recordings
        #[arg(long, default_value = "raw")]
        raw_dir: PathBuf,

        /// Output root for per-category clip directories and the manifest
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Target sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Maximum clip duration in seconds
        #[arg(long, default_value_t = DEFAULT_MAX_DURATION_SEC)]
        max_duration: f64,

        /// Maximum number of clips per category
        #[arg(long, default_value_t = DEFAULT_SAMPLES_PER_CATEGORY)]
        samples_per_category: usize,
    },

    /// Generate level-normalized WAVs for every manifest entry
    Levels {
        /// Manifest written by `ingest`
        #[arg(long, default_value = "manifest_original.json")]
        manifest: PathBuf,

        /// Target levels in dBFS
        #[arg(long, value_delimiter = ',',
              default_values_t = [-40, -35, -30, -25, -20, -15, -10])]
        levels: Vec<i32>,
    },

    /// Mix a speech clip with a noise bed at target levels
    Mix {
        /// Speech audio file
        speech: PathBuf,

        /// Noise audio file
        noise: PathBuf,

        /// Speech target level in dBFS
        #[arg(long, default_value_t = -25.0)]
        speech_level: f64,

        /// Noise target level in dBFS
        #[arg(long, default_value_t = -35.0)]
        noise_level: f64,

        /// Loop crossfade duration in seconds
        #[arg(long, default_value_t = noisebed_dsp::DEFAULT_CROSSFADE_SECS)]
        crossfade: f64,

        /// Output WAV path
        #[arg(long, default_value = "mixed.wav")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Ingest {
            raw_dir,
            out_dir,
            sample_rate,
            max_duration,
            samples_per_category,
        } => ingest::run(&ingest::IngestOptions {
            raw_dir,
            out_dir,
            sample_rate,
            max_duration,
            samples_per_category,
        }),
        Command::Levels { manifest, levels } => levels::run(&manifest, &levels),
        Command::Mix {
            speech,
            noise,
            speech_level,
            noise_level,
            crossfade,
            out,
        } => mixcmd::run(&mixcmd::MixOptions {
            speech,
            noise,
            speech_level,
            noise_level,
            crossfade,
            out,
        }),
    }
}
