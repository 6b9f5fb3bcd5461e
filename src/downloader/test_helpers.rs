//! Shared test helpers: a scriptable in-process fetch engine.

use crate::config::{Config, PipelineConfig};
use crate::engine::{FetchEngine, FetchResult};
use crate::types::DownloadJob;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// How the fake engine answers for a given song name
#[derive(Clone, Debug)]
pub(crate) enum Behavior {
    /// Write the MP3 and report success
    Succeed,
    /// Report failure without writing anything
    Fail,
    /// Return an error, as if the engine could not be started
    Error,
    /// Report success but leave no file behind
    SucceedWithoutFile,
}

/// Fetch engine that records every call and writes a small MP3 on success
pub(crate) struct RecordingEngine {
    calls: Mutex<Vec<DownloadJob>>,
    pipelines: Mutex<Vec<PipelineConfig>>,
    behaviors: HashMap<String, Behavior>,
}

impl RecordingEngine {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            pipelines: Mutex::new(Vec::new()),
            behaviors: HashMap::new(),
        }
    }

    /// Override the behavior for one song name (default: Succeed)
    pub(crate) fn with(mut self, name: &str, behavior: Behavior) -> Self {
        self.behaviors.insert(name.to_string(), behavior);
        self
    }

    pub(crate) fn calls(&self) -> Vec<DownloadJob> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn pipelines(&self) -> Vec<PipelineConfig> {
        self.pipelines.lock().unwrap().clone()
    }
}

#[async_trait]
impl FetchEngine for RecordingEngine {
    async fn fetch(
        &self,
        job: &DownloadJob,
        pipeline: &PipelineConfig,
    ) -> crate::Result<FetchResult> {
        self.calls.lock().unwrap().push(job.clone());
        self.pipelines.lock().unwrap().push(pipeline.clone());

        match self.behaviors.get(&job.name).unwrap_or(&Behavior::Succeed) {
            Behavior::Succeed => {
                tokio::fs::write(job.output_path(), format!("mp3:{}", job.locator)).await?;
                Ok(FetchResult::ok())
            }
            Behavior::Fail => Ok(FetchResult::failed("ERROR: Video unavailable")),
            Behavior::Error => Err(crate::Error::ExternalTool(
                "Failed to execute yt-dlp: No such file or directory".into(),
            )),
            Behavior::SucceedWithoutFile => Ok(FetchResult::ok()),
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Config rooted at `base_dir`, all other settings default
pub(crate) fn test_config(base_dir: &Path) -> Config {
    Config {
        base_dir: base_dir.to_path_buf(),
        ..Default::default()
    }
}
