//! Depth-first walk of the manifest tree

use super::job::run_job;
use crate::config::Config;
use crate::engine::FetchEngine;
use crate::manifest::ManifestNode;
use crate::types::{DownloadJob, FailureReason, JobOutcome, RunReport};
use crate::validation::is_valid_filename;
use std::collections::BTreeMap;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use tracing::{debug, error};

/// Everything a walk needs, passed explicitly down the recursion
pub(crate) struct WalkContext<'a> {
    pub(crate) config: &'a Config,
    pub(crate) engine: &'a dyn FetchEngine,
    pub(crate) report: RunReport,
}

/// Visit every entry of `entries`, whose output directory is `directory`
///
/// `trail` is the manifest path of `entries` (keys joined with `/`, empty
/// at the root) and is used only to label log lines and report records.
///
/// Subdirectories are not created here; the job runner creates a directory
/// the first time a leaf below it needs one, so a branch without any valid
/// leaves leaves no trace on disk.
pub(crate) fn walk_tree<'a, 'b: 'a>(
    ctx: &'a mut WalkContext<'b>,
    entries: &'a BTreeMap<String, ManifestNode>,
    directory: PathBuf,
    trail: String,
) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
    Box::pin(async move {
        for (key, node) in entries {
            let entry = if trail.is_empty() {
                key.clone()
            } else {
                format!("{}/{}", trail, key)
            };

            if !is_valid_filename(key) {
                error!(entry = %entry, "invalid filename: {:?}", key);
                ctx.report
                    .record(entry, JobOutcome::Failed(FailureReason::InvalidName));
                continue;
            }

            match node {
                ManifestNode::Locator(locator) => {
                    let job = DownloadJob::new(locator.as_str(), key.as_str(), directory.clone());
                    let outcome = run_job(&job, ctx.config, ctx.engine).await;
                    debug!(entry = %entry, %outcome, "entry finished");
                    ctx.report.record(entry, outcome);
                }
                ManifestNode::SubTree(children) => {
                    debug!(entry = %entry, count = children.len(), "entering folder");
                    walk_tree(&mut *ctx, children, directory.join(key), entry).await;
                }
                ManifestNode::Invalid(kind) => {
                    error!(
                        entry = %entry,
                        value_kind = %kind,
                        "invalid value for key {:?}: expected a URL or an object, found {}",
                        key,
                        kind
                    );
                    ctx.report
                        .record(entry, JobOutcome::Failed(FailureReason::InvalidNodeValue));
                }
            }
        }
    })
}
