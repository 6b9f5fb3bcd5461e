//! Configuration types for ytmfetch

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File extension of every finished download. The pipeline always
/// transcodes to MP3, so the idempotency check looks for this extension.
pub const AUDIO_EXTENSION: &str = "mp3";

/// External tool paths (yt-dlp, ffmpeg)
///
/// Used as a nested sub-config within [`Config`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolsConfig {
    /// Path to yt-dlp executable (auto-detected if None)
    #[serde(default)]
    pub yt_dlp_path: Option<PathBuf>,

    /// Path to ffmpeg, forwarded to yt-dlp as `--ffmpeg-location` (yt-dlp's own lookup if None)
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,

    /// Whether to search PATH for yt-dlp if no explicit path is set (default: true)
    #[serde(default = "default_true")]
    pub search_path: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            yt_dlp_path: None,
            ffmpeg_path: None,
            search_path: true,
        }
    }
}

/// Run configuration
///
/// Built once (normally from the command line) before a run starts and
/// shared read-only by the tree walker and job runner for the whole run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Root of the output tree (default: "."; must be absolute before a run)
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Re-download leaves even when their MP3 already exists (default: false)
    #[serde(default)]
    pub overwrite: bool,

    /// Target audio quality handed to the transcoder: a VBR level `0`-`10`
    /// or a bitrate such as `128` / `192K` (default: "128")
    #[serde(default = "default_audio_quality")]
    pub audio_quality: String,

    /// Let the fetch engine print its own progress and diagnostics (default: false)
    #[serde(default)]
    pub verbose: bool,

    /// External tool locations
    #[serde(flatten)]
    pub tools: ToolsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            overwrite: false,
            audio_quality: default_audio_quality(),
            verbose: false,
            tools: ToolsConfig::default(),
        }
    }
}

impl Config {
    /// Check the settings a run depends on.
    ///
    /// The base directory has to be absolute so every path handed to the
    /// fetch engine is independent of the engine's working directory.
    pub fn validate(&self) -> Result<()> {
        if !self.base_dir.is_absolute() {
            return Err(Error::config(
                "base_dir",
                format!(
                    "base directory must be absolute, got {}",
                    self.base_dir.display()
                ),
            ));
        }
        if self.audio_quality.trim().is_empty() {
            return Err(Error::config("audio_quality", "audio quality must not be empty"));
        }
        Ok(())
    }
}

/// Options forwarded to the fetch engine for every job
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Transcoder quality (see [`Config::audio_quality`])
    pub audio_quality: String,
    /// Whether existing output and temp artifacts may be clobbered
    pub overwrite: bool,
    /// Whether the engine emits its own progress output
    pub verbose: bool,
    /// Resume partially downloaded source streams. Always true.
    pub continue_partial: bool,
    /// Explicit ffmpeg location, if configured
    pub ffmpeg_path: Option<PathBuf>,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            audio_quality: config.audio_quality.clone(),
            overwrite: config.overwrite,
            verbose: config.verbose,
            continue_partial: true,
            ffmpeg_path: config.tools.ffmpeg_path.clone(),
        }
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_audio_quality() -> String {
    "128".to_string()
}

fn default_true() -> bool {
    true
}
