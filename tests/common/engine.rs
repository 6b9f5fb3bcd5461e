//! In-process stand-in for yt-dlp

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;
use ytmfetch::{DownloadJob, FetchEngine, FetchResult, PipelineConfig};

/// Fake fetch engine that writes `<dir>/<name>.mp3` and records each call
///
/// Songs whose locator is listed in `unavailable` fail the way yt-dlp does
/// for a removed video.
#[derive(Default)]
pub struct FakeEngine {
    calls: Mutex<Vec<DownloadJob>>,
    unavailable: HashSet<String>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every fetch of `locator` fail
    pub fn unavailable(mut self, locator: &str) -> Self {
        self.unavailable.insert(locator.to_string());
        self
    }

    pub fn calls(&self) -> Vec<DownloadJob> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl FetchEngine for FakeEngine {
    async fn fetch(
        &self,
        job: &DownloadJob,
        _pipeline: &PipelineConfig,
    ) -> ytmfetch::Result<FetchResult> {
        self.calls.lock().unwrap().push(job.clone());

        if self.unavailable.contains(&job.locator) {
            return Ok(FetchResult::failed(format!(
                "ERROR: [youtube] {}: Video unavailable",
                job.locator
            )));
        }

        tokio::fs::write(job.output_path(), format!("ID3 {}", job.locator)).await?;
        Ok(FetchResult::ok())
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
