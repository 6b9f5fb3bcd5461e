//! Media fetch engine
//!
//! Retrieval, transcoding to MP3, metadata tagging and cover-art embedding
//! are delegated to an external program. This module puts a trait in front
//! of it so the job runner only ever sees a success flag:
//!
//! - [`YtDlpEngine`]: runs the external `yt-dlp` binary (with ffmpeg)
//! - [`NoOpEngine`]: stand-in when no binary is available; every fetch fails
//!
//! ## Usage
//!
//! ```no_run
//! use ytmfetch::config::{Config, PipelineConfig};
//! use ytmfetch::engine::{FetchEngine, YtDlpEngine};
//! use ytmfetch::types::DownloadJob;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = YtDlpEngine::from_path().expect("yt-dlp binary not found");
//!
//!     let job = DownloadJob::new(
//!         "https://music.youtube.com/watch?v=fJ9rUzIMcZQ",
//!         "Bohemian Rhapsody",
//!         "/music/Queen",
//!     );
//!     let result = engine.fetch(&job, &PipelineConfig::from(&Config::default())).await?;
//!     println!("success: {}", result.success);
//!
//!     Ok(())
//! }
//! ```

mod noop;
mod traits;
mod ytdlp;

pub use noop::NoOpEngine;
pub use traits::{FetchEngine, FetchResult};
pub use ytdlp::YtDlpEngine;
