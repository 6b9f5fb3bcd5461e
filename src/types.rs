//! Core types for ytmfetch

use crate::config::AUDIO_EXTENSION;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// One song to fetch, derived from a manifest leaf
///
/// Built by the tree walker when it reaches a URL entry and handed straight
/// to the job runner; never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadJob {
    /// Source URL
    pub locator: String,
    /// Output base name, without extension
    pub name: String,
    /// Absolute directory the MP3 is written to
    pub directory: PathBuf,
}

impl DownloadJob {
    /// Create a new job
    pub fn new(
        locator: impl Into<String>,
        name: impl Into<String>,
        directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            locator: locator.into(),
            name: name.into(),
            directory: directory.into(),
        }
    }

    /// Path of the finished audio file: `<directory>/<name>.mp3`
    ///
    /// Built with `format!` rather than `Path::with_extension` so names that
    /// already contain dots (e.g. `"Vol. 2"`) keep them.
    pub fn output_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}.{}", self.name, AUDIO_EXTENSION))
    }
}

/// Why a job did not run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A non-empty output file already exists and overwrite is off
    AlreadyPresent,
}

/// Why an entry failed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The key is not a legal file or directory name
    InvalidName,
    /// The value is neither a URL string nor a nested object
    InvalidNodeValue,
    /// The fetch engine reported failure or could not be run
    EngineFailure,
}

/// Terminal state of one manifest entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum JobOutcome {
    /// Nothing to do
    Skipped(SkipReason),
    /// The fetch engine produced the file
    Succeeded,
    /// The entry produced no file
    Failed(FailureReason),
}

impl JobOutcome {
    /// Whether the entry's file is in place after this outcome
    pub fn is_success(&self) -> bool {
        matches!(self, JobOutcome::Skipped(_) | JobOutcome::Succeeded)
    }
}

impl fmt::Display for JobOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobOutcome::Skipped(SkipReason::AlreadyPresent) => f.write_str("skipped (already present)"),
            JobOutcome::Succeeded => f.write_str("succeeded"),
            JobOutcome::Failed(FailureReason::InvalidName) => f.write_str("failed (invalid name)"),
            JobOutcome::Failed(FailureReason::InvalidNodeValue) => {
                f.write_str("failed (invalid value)")
            }
            JobOutcome::Failed(FailureReason::EngineFailure) => {
                f.write_str("failed (download error)")
            }
        }
    }
}

/// Outcome of one manifest entry, located by its manifest path
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JobReport {
    /// Manifest path of the entry: its keys joined with `/` (e.g. `Artist/Song`)
    pub entry: String,
    /// What happened
    #[serde(flatten)]
    pub outcome: JobOutcome,
}

/// Everything that happened during one run, in visit order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// One record per visited entry (leaves and rejected entries; not folders)
    pub entries: Vec<JobReport>,
}

impl RunReport {
    /// Append an outcome
    pub fn record(&mut self, entry: impl Into<String>, outcome: JobOutcome) {
        self.entries.push(JobReport {
            entry: entry.into(),
            outcome,
        });
    }

    /// Number of recorded entries
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Entries that were downloaded during this run
    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, JobOutcome::Succeeded))
    }

    /// Entries left alone because their file was already there
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, JobOutcome::Skipped(_)))
    }

    /// Entries that produced no file
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, JobOutcome::Failed(_)))
    }

    /// Outcome recorded for a manifest path, if it was visited
    pub fn outcome_of(&self, entry: &str) -> Option<JobOutcome> {
        self.entries
            .iter()
            .find(|r| r.entry == entry)
            .map(|r| r.outcome)
    }

    fn count(&self, pred: impl Fn(&JobOutcome) -> bool) -> usize {
        self.entries.iter().filter(|r| pred(&r.outcome)).count()
    }
}
