//! Fetch engine backed by the external yt-dlp binary

use super::traits::{FetchEngine, FetchResult};
use crate::config::{AUDIO_EXTENSION, PipelineConfig};
use crate::types::DownloadJob;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// ffmpeg options for the cover art: encode as MJPEG and crop the
/// thumbnail to a centred square. The filter is quoted because yt-dlp
/// shell-splits postprocessor arguments before handing them to ffmpeg.
const THUMBNAIL_PP_ARGS: &str = "EmbedThumbnail+ffmpeg_o:-c:v mjpeg -vf \"crop='min(iw,ih)':'min(iw,ih)':'(iw-ow)/2':'(ih-oh)/2'\"";

/// CLI-based fetch engine using the external `yt-dlp` binary
///
/// Each job is one `yt-dlp` invocation that downloads the best audio
/// stream, converts it to MP3, writes tags and embeds the video thumbnail
/// as cover art. ffmpeg must be reachable by yt-dlp (on PATH or through
/// [`PipelineConfig::ffmpeg_path`]).
///
/// # Examples
///
/// ```no_run
/// use ytmfetch::engine::YtDlpEngine;
/// use std::path::PathBuf;
///
/// // Create with explicit path
/// let engine = YtDlpEngine::new(PathBuf::from("/usr/local/bin/yt-dlp"));
///
/// // Or auto-discover from PATH
/// let engine = YtDlpEngine::from_path().expect("yt-dlp not found in PATH");
/// ```
pub struct YtDlpEngine {
    binary_path: PathBuf,
}

impl YtDlpEngine {
    /// Create a new engine with an explicit binary path
    pub fn new(binary_path: PathBuf) -> Self {
        Self { binary_path }
    }

    /// Attempt to find yt-dlp in PATH
    ///
    /// # Returns
    ///
    /// `Some(YtDlpEngine)` if the binary is found, `None` otherwise.
    pub fn from_path() -> Option<Self> {
        which::which("yt-dlp").ok().map(Self::new)
    }

    /// Path of the binary this engine runs
    pub fn binary_path(&self) -> &std::path::Path {
        &self.binary_path
    }

    /// Command-line arguments for one job
    pub fn build_args(job: &DownloadJob, pipeline: &PipelineConfig) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(40);

        args.push("--format".into());
        args.push("bestaudio/best".into());
        args.push("--paths".into());
        args.push((&job.directory).into());
        args.push("--output".into());
        // Output templates are %-formatted, so literal percent signs are doubled
        args.push(format!("{}.%(ext)s", job.name.replace('%', "%%")).into());

        args.push("--extract-audio".into());
        args.push("--audio-format".into());
        args.push(AUDIO_EXTENSION.into());
        args.push("--audio-quality".into());
        args.push((&pipeline.audio_quality).into());

        // `--embed-thumbnail` fetches the thumbnail itself and removes it
        // once embedded; `--write-thumbnail` would leave a .jpg behind
        args.push("--embed-metadata".into());
        args.push("--convert-thumbnails".into());
        args.push("jpg".into());
        args.push("--embed-thumbnail".into());
        args.push("--postprocessor-args".into());
        args.push(THUMBNAIL_PP_ARGS.into());

        args.push("--no-write-subs".into());
        args.push("--no-write-auto-subs".into());

        args.push(if pipeline.continue_partial { "--continue" } else { "--no-continue" }.into());
        args.push(
            if pipeline.overwrite {
                "--force-overwrites"
            } else {
                "--no-overwrites"
            }
            .into(),
        );

        if !pipeline.verbose {
            args.push("--quiet".into());
            args.push("--no-warnings".into());
        }

        if let Some(ref ffmpeg) = pipeline.ffmpeg_path {
            args.push("--ffmpeg-location".into());
            args.push(ffmpeg.into());
        }

        // Everything after `--` is a URL, even if it starts with a dash
        args.push("--".into());
        args.push((&job.locator).into());
        args
    }
}

#[async_trait]
impl FetchEngine for YtDlpEngine {
    async fn fetch(
        &self,
        job: &DownloadJob,
        pipeline: &PipelineConfig,
    ) -> crate::Result<FetchResult> {
        let mut command = Command::new(&self.binary_path);
        command
            .args(Self::build_args(job, pipeline))
            .stdin(Stdio::null());

        // Verbose runs show yt-dlp's own progress; quiet runs keep its
        // output so the failure reason can be reported.
        if pipeline.verbose {
            command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        debug!(
            binary = ?self.binary_path,
            locator = %job.locator,
            directory = ?job.directory,
            "running yt-dlp"
        );

        let output = command
            .output()
            .await
            .map_err(|e| crate::Error::ExternalTool(format!("Failed to execute yt-dlp: {}", e)))?;

        let exit_code = output.status.code();
        if output.status.success() {
            return Ok(FetchResult {
                success: true,
                exit_code,
                error: None,
            });
        }

        let error = last_line(&output.stderr)
            .or_else(|| last_line(&output.stdout))
            .unwrap_or_else(|| match exit_code {
                Some(code) => format!("yt-dlp exited with status {}", code),
                None => "yt-dlp was terminated by a signal".to_string(),
            });

        Ok(FetchResult {
            success: false,
            exit_code,
            error: Some(error),
        })
    }

    fn name(&self) -> &'static str {
        "yt-dlp"
    }
}

/// Last non-blank line of captured process output
fn last_line(bytes: &[u8]) -> Option<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
