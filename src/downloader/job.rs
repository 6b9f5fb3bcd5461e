//! Job runner: one manifest leaf → one fetch attempt
//!
//! The runner owns the per-song policy: name re-validation, lazy directory
//! creation, the "already downloaded" gate, and turning every engine error
//! into a logged [`FailureReason::EngineFailure`]. Nothing it does can
//! return an error to the caller.

use crate::config::{Config, PipelineConfig};
use crate::engine::FetchEngine;
use crate::types::{DownloadJob, FailureReason, JobOutcome, SkipReason};
use crate::validation::is_valid_filename;
use std::path::Path;
use tracing::{debug, error, info};

/// Run one download job to a terminal outcome
pub(crate) async fn run_job(
    job: &DownloadJob,
    config: &Config,
    engine: &dyn FetchEngine,
) -> JobOutcome {
    // The walker has already checked the key, but a job can be built by
    // other callers too.
    if !is_valid_filename(&job.name) {
        error!(name = %job.name, "invalid filename: {:?}", job.name);
        return JobOutcome::Failed(FailureReason::InvalidName);
    }

    if let Err(e) = tokio::fs::create_dir_all(&job.directory).await {
        error!(
            name = %job.name,
            directory = ?job.directory,
            error = %e,
            "failed to create output directory"
        );
        return JobOutcome::Failed(FailureReason::EngineFailure);
    }

    let output_path = job.output_path();
    if !config.overwrite && is_already_downloaded(&output_path).await {
        debug!(name = %job.name, path = ?output_path, "already downloaded, skipping");
        return JobOutcome::Skipped(SkipReason::AlreadyPresent);
    }

    info!(name = %job.name, "downloading: {}", job.name);

    let pipeline = PipelineConfig::from(config);
    match engine.fetch(job, &pipeline).await {
        Ok(result) if result.success => {
            debug!(name = %job.name, path = ?output_path, "download complete");
            JobOutcome::Succeeded
        }
        Ok(result) => {
            error!(
                name = %job.name,
                locator = %job.locator,
                exit_code = ?result.exit_code,
                "download failed: {}",
                result.error.as_deref().unwrap_or("unknown error")
            );
            JobOutcome::Failed(FailureReason::EngineFailure)
        }
        Err(e) => {
            error!(
                name = %job.name,
                locator = %job.locator,
                engine = engine.name(),
                "download failed: {}",
                e
            );
            JobOutcome::Failed(FailureReason::EngineFailure)
        }
    }
}

/// A regular file with at least one byte counts as a finished download.
/// Missing and empty files (left by an interrupted run) do not.
async fn is_already_downloaded(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(meta) => meta.is_file() && meta.len() > 0,
        Err(_) => false,
    }
}
