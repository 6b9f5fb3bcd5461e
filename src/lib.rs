//! # ytmfetch
//!
//! Batch audio downloader driven by a JSON manifest.
//!
//! A manifest maps names to URLs (songs) or to nested objects (folders).
//! Every song becomes `<folder path>/<name>.mp3` below a base directory,
//! fetched by `yt-dlp` as MP3 with embedded metadata and square cover art.
//! Songs that are already on disk are skipped, so re-running a manifest only
//! fetches what is missing.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ytmfetch::{Config, Downloader, Manifest};
//! use std::path::PathBuf;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         base_dir: PathBuf::from("/home/me/Music"),
//!         audio_quality: "192".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let manifest = Manifest::from_json_str(
//!         r#"{"Artist": {"Song": "https://music.youtube.com/watch?v=abc"}}"#,
//!     )?;
//!
//!     let downloader = Downloader::from_config(config)?;
//!     let report = downloader.download(&manifest).await;
//!     println!("{} of {} in place", report.succeeded() + report.skipped(), report.total());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Command-line interface
pub mod cli;
/// Configuration types
pub mod config;
/// Manifest walker and per-song job runner
pub mod downloader;
/// Fetch engines (yt-dlp and fallback)
pub mod engine;
/// Error types
pub mod error;
/// Manifest parsing
pub mod manifest;
/// Core types and outcomes
pub mod types;
/// Filename validation
pub mod validation;

// Re-export commonly used types
pub use config::{Config, PipelineConfig, ToolsConfig};
pub use downloader::Downloader;
pub use engine::{FetchEngine, FetchResult, NoOpEngine, YtDlpEngine};
pub use error::{Error, Result};
pub use manifest::{Manifest, ManifestNode, ValueKind};
pub use types::{DownloadJob, FailureReason, JobOutcome, JobReport, RunReport, SkipReason};
pub use validation::is_valid_filename;
