//! No-op fetch engine for graceful degradation

use super::traits::{FetchEngine, FetchResult};
use crate::config::PipelineConfig;
use crate::types::DownloadJob;
use async_trait::async_trait;

/// Fetch engine used when no yt-dlp binary is available or configured
///
/// Every fetch returns `Error::NotSupported`, which the job runner records
/// as a failed download. The walk still visits every entry, so invalid
/// names and values are reported and already-downloaded files are still
/// recognised.
///
/// # Examples
///
/// ```
/// use ytmfetch::config::{Config, PipelineConfig};
/// use ytmfetch::engine::{FetchEngine, NoOpEngine};
/// use ytmfetch::types::DownloadJob;
///
/// # #[tokio::main]
/// # async fn main() {
/// let engine = NoOpEngine;
/// let job = DownloadJob::new("https://example.com", "Song", "/music");
/// let result = engine.fetch(&job, &PipelineConfig::from(&Config::default())).await;
/// assert!(result.is_err());
/// # }
/// ```
pub struct NoOpEngine;

#[async_trait]
impl FetchEngine for NoOpEngine {
    async fn fetch(
        &self,
        _job: &DownloadJob,
        _pipeline: &PipelineConfig,
    ) -> crate::Result<FetchResult> {
        Err(crate::Error::NotSupported(
            "downloading requires the external yt-dlp binary. \
             Pass --yt-dlp <path> or ensure yt-dlp is in PATH."
                .into(),
        ))
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
