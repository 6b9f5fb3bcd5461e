//! Batch downloader: turns a manifest into a tree of MP3 files.
//!
//! - `walker`: depth-first traversal of the manifest
//! - `job`: per-song idempotency gate and fetch

mod job;
mod walker;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;

use crate::config::{Config, ToolsConfig};
use crate::engine::{FetchEngine, NoOpEngine, YtDlpEngine};
use crate::error::Result;
use crate::manifest::Manifest;
use crate::types::RunReport;
use std::sync::Arc;
use walker::{WalkContext, walk_tree};

/// Top-level driver for one or more manifest runs
///
/// Owns the run configuration and the fetch engine. Runs are strictly
/// sequential: one job at a time, in manifest order.
///
/// # Example
///
/// ```no_run
/// use ytmfetch::{Config, Downloader, Manifest};
/// use std::path::PathBuf;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config {
///         base_dir: PathBuf::from("/music"),
///         ..Default::default()
///     };
///     let downloader = Downloader::from_config(config)?;
///
///     let manifest = Manifest::load(&PathBuf::from("/music/songs.json")).await?;
///     let report = downloader.download(&manifest).await;
///     println!("{} failed", report.failed());
///
///     Ok(())
/// }
/// ```
pub struct Downloader {
    config: Arc<Config>,
    engine: Arc<dyn FetchEngine>,
}

impl Downloader {
    /// Create a downloader with an explicit fetch engine
    pub fn new(config: Config, engine: Arc<dyn FetchEngine>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            engine,
        })
    }

    /// Create a downloader, picking the fetch engine from the tools config
    ///
    /// An explicit `yt_dlp_path` wins; otherwise PATH is searched when
    /// `search_path` is set. With no binary, every download fails but the
    /// walk still runs.
    pub fn from_config(config: Config) -> Result<Self> {
        let engine = select_engine(&config.tools);
        tracing::debug!(engine = engine.name(), "fetch engine initialized");
        Self::new(config, engine)
    }

    /// The run configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Name of the active fetch engine
    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    /// Download every leaf of `manifest` below the base directory
    ///
    /// Never fails: bad entries and failed downloads are logged and
    /// recorded in the returned report, and the walk carries on.
    pub async fn download(&self, manifest: &Manifest) -> RunReport {
        tracing::info!(
            base_dir = ?self.config.base_dir,
            songs = manifest.leaf_count(),
            overwrite = self.config.overwrite,
            quality = %self.config.audio_quality,
            "starting download run"
        );

        let mut ctx = WalkContext {
            config: &self.config,
            engine: self.engine.as_ref(),
            report: RunReport::default(),
        };
        walk_tree(
            &mut ctx,
            manifest.entries(),
            self.config.base_dir.clone(),
            String::new(),
        )
        .await;

        let report = ctx.report;
        tracing::info!(
            downloaded = report.succeeded(),
            skipped = report.skipped(),
            failed = report.failed(),
            "finished: {} downloaded, {} already present, {} failed",
            report.succeeded(),
            report.skipped(),
            report.failed()
        );
        report
    }
}

/// Pick the fetch engine: explicit binary, then PATH search, then no-op
pub(crate) fn select_engine(tools: &ToolsConfig) -> Arc<dyn FetchEngine> {
    if let Some(ref path) = tools.yt_dlp_path {
        Arc::new(YtDlpEngine::new(path.clone()))
    } else if tools.search_path {
        YtDlpEngine::from_path()
            .map(|e| Arc::new(e) as Arc<dyn FetchEngine>)
            .unwrap_or_else(|| {
                tracing::warn!(
                    "yt-dlp not found in PATH; every download will fail until it is installed"
                );
                Arc::new(NoOpEngine)
            })
    } else {
        tracing::warn!("no yt-dlp path configured and PATH search disabled; every download will fail");
        Arc::new(NoOpEngine)
    }
}
