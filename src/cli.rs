//! Command-line parser and the glue that turns flags into a [`Config`].

use crate::config::{Config, ToolsConfig};
use crate::error::Result;
use crate::types::RunReport;
use clap::Parser;
use std::path::{Component, Path, PathBuf};

/// Download a tree of songs described by a JSON manifest
///
/// Boolean options come in pairs (`--verbose` / `--no-verbose`); when both
/// are given, the last one wins.
#[derive(Debug, Parser)]
#[command(name = "ytmfetch")]
#[command(about = "Download songs listed in a JSON manifest as tagged MP3 files")]
#[command(version)]
pub struct Cli {
    /// Show debug logs and the downloader's own output
    #[arg(short = 'v', long = "verbose", overrides_with = "no_verbose")]
    pub verbose: bool,

    /// Only show progress and errors (default)
    #[arg(long = "no-verbose", overrides_with = "verbose")]
    pub no_verbose: bool,

    /// Re-download songs that already exist
    #[arg(short = 'w', long = "overwrite", overrides_with = "no_overwrite")]
    pub overwrite: bool,

    /// Skip songs that already exist (default)
    #[arg(long = "no-overwrite", overrides_with = "overwrite")]
    pub no_overwrite: bool,

    /// Base directory for downloads [default: current directory]
    #[arg(short = 'd', long = "dir", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Manifest file, relative to the base directory
    #[arg(
        short = 's',
        long = "songs-file",
        value_name = "PATH",
        default_value = "songs.json"
    )]
    pub songs_file: PathBuf,

    /// Audio quality passed to the encoder (kbps, or 0-10 for VBR)
    #[arg(short = 'q', long = "quality", default_value = "128")]
    pub quality: String,

    /// Path to the yt-dlp binary [default: search PATH]
    #[arg(long = "yt-dlp", value_name = "PATH", env = "YTMFETCH_YT_DLP")]
    pub yt_dlp: Option<PathBuf>,

    /// Path to ffmpeg, or the directory containing it
    #[arg(long = "ffmpeg", value_name = "PATH", env = "YTMFETCH_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// Write a JSON report of every entry's outcome to this file
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

impl Cli {
    /// Build the run configuration from the parsed flags
    ///
    /// The base directory has `~` expanded and is made absolute against the
    /// current directory. It does not have to exist yet.
    pub fn into_config(&self) -> Result<Config> {
        let base_dir = match &self.dir {
            Some(dir) => std::path::absolute(expand_tilde(dir))?,
            None => std::env::current_dir()?,
        };

        Ok(Config {
            base_dir,
            overwrite: self.overwrite,
            audio_quality: self.quality.clone(),
            verbose: self.verbose,
            tools: ToolsConfig {
                yt_dlp_path: self.yt_dlp.as_deref().map(expand_tilde),
                ffmpeg_path: self.ffmpeg.as_deref().map(expand_tilde),
                ..Default::default()
            },
        })
    }

    /// Location of the manifest for a run rooted at `config.base_dir`
    ///
    /// An absolute `--songs-file` is used as is.
    pub fn songs_path(&self, config: &Config) -> PathBuf {
        config.base_dir.join(expand_tilde(&self.songs_file))
    }
}

/// Replace a leading `~` component with the home directory
///
/// Paths without a leading `~` (and `~user` forms) are returned unchanged,
/// as is everything when no home directory is known.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Save `report` as pretty-printed JSON
pub async fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let json = serde_json::to_vec_pretty(report)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
