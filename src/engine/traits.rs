//! Traits and types for the media fetch engine

use crate::config::PipelineConfig;
use crate::types::DownloadJob;
use async_trait::async_trait;

/// Result of one fetch attempt
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Whether the finished MP3 was produced
    pub success: bool,
    /// Process exit code, when the engine is an external process that exited normally
    pub exit_code: Option<i32>,
    /// Short description of the failure, if any
    pub error: Option<String>,
}

impl FetchResult {
    /// A successful fetch
    pub fn ok() -> Self {
        Self {
            success: true,
            exit_code: Some(0),
            error: None,
        }
    }

    /// A failed fetch with a reason
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code: None,
            error: Some(error.into()),
        }
    }
}

/// Trait for the external download-and-postprocess pipeline
///
/// On success an implementation must leave exactly one finished file at
/// [`DownloadJob::output_path`], with embedded metadata and square cover art.
/// Failure may be reported either as `Ok` with `success == false` or as an
/// `Err`; callers treat both the same way.
///
/// # Examples
///
/// ```no_run
/// use ytmfetch::config::{Config, PipelineConfig};
/// use ytmfetch::engine::{FetchEngine, YtDlpEngine};
/// use ytmfetch::types::DownloadJob;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let engine = YtDlpEngine::from_path().expect("yt-dlp not found in PATH");
/// let job = DownloadJob::new("https://music.youtube.com/watch?v=abc", "Song", "/music");
///
/// let result = engine.fetch(&job, &PipelineConfig::from(&Config::default())).await?;
/// if !result.success {
///     eprintln!("failed: {:?}", result.error);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait FetchEngine: Send + Sync {
    /// Download `job.locator` and write `<job.directory>/<job.name>.mp3`
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot be started at all (missing
    /// binary, permission denied) or is not available in this build.
    async fn fetch(&self, job: &DownloadJob, pipeline: &PipelineConfig)
    -> crate::Result<FetchResult>;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}
