//! Main workflow orchestration logic
//!
//! Runs the pipeline resolve version → read history → classify → bump. The
//! repository is passed in, so the whole chain runs against
//! [crate::git::MockRepository] in tests.

use std::collections::HashSet;

use tracing::info;

use crate::analyzer::next_version;
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::conventional::Classifier;
use crate::domain::{BumpDecision, ReleaseTag};
use crate::error::Result;
use crate::git::Repository;
use crate::history::read_history;
use crate::version::latest_version;

/// Arguments for the version workflow
///
/// Mirrors the CLI flags that affect the computation, decoupled from clap so
/// the workflow can be called programmatically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowArgs {
    /// Boundary revision overriding the latest release tag
    pub since: Option<String>,

    /// Type tags to consider; overrides `classifier.include` when set
    pub include: Option<Vec<String>>,
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub decision: BumpDecision,

    /// Latest release tag, if the repository has one
    pub release: Option<ReleaseTag>,

    pub warnings: Vec<BoundaryWarning>,
}

/// Compute the next version for a repository
///
/// # Returns
///
/// The bump decision, or the first error hit by any stage. Nothing is
/// partially computed on error.
pub fn run_pipeline<R: Repository + ?Sized>(
    repo: &R,
    config: &Config,
    args: &WorkflowArgs,
) -> Result<WorkflowResult> {
    let mut warnings = Vec::new();

    let release = latest_version(repo, &config.tags.prefix)?;
    let start = match &release {
        Some(release) => release.version.clone(),
        None => {
            let initial = config.initial_version()?;
            warnings.push(BoundaryWarning::NoReleaseTag {
                initial_version: initial.to_string(),
            });
            initial
        }
    };

    let until = args
        .since
        .as_deref()
        .or(release.as_ref().map(|r| r.name.as_str()));
    let commits = read_history(repo, until)?;

    if commits.is_empty() {
        if let Some(boundary) = until {
            warnings.push(BoundaryWarning::NoNewCommits {
                boundary: boundary.to_string(),
            });
        }
    }

    let include: HashSet<String> = args
        .include
        .as_ref()
        .unwrap_or(&config.classifier.include)
        .iter()
        .cloned()
        .collect();
    let classified = Classifier::from_config(config).classify(&commits, &include)?;

    let next = next_version(&start, &classified);
    info!(previous = %start, next = %next, commits = classified.len(), "computed next version");

    Ok(WorkflowResult {
        decision: BumpDecision::new(start, next, classified),
        release,
        warnings,
    })
}
