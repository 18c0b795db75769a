use crate::error::{GitverError, Result};
use git2::{ErrorCode, Repository as Git2Repo};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Repository backed by the `git` command line tool
///
/// The repository root is located with `git2` so that "not a repository" is
/// reported before any process is spawned; the queries themselves run the
/// `git` binary from that root.
pub struct GitCliRepository {
    workdir: PathBuf,
}

impl GitCliRepository {
    /// Discover the git repository containing `path`
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            GitverError::history_unavailable(format!(
                "not a git repository: {} ({})",
                path.display(),
                e.message()
            ))
        })?;

        let workdir = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        debug!(workdir = %workdir.display(), "discovered repository");

        Ok(GitCliRepository { workdir })
    }

    /// Root directory the git commands run in
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Whether HEAD points at a branch with no commits yet
    fn is_unborn(&self) -> Result<bool> {
        let repo = Git2Repo::open(&self.workdir).map_err(|e| {
            GitverError::history_unavailable(format!(
                "cannot open repository {}: {}",
                self.workdir.display(),
                e.message()
            ))
        })?;
        let unborn = match repo.head() {
            Ok(_) => Ok(false),
            Err(e) if e.code() == ErrorCode::UnbornBranch => Ok(true),
            Err(e) => Err(GitverError::history_unavailable(format!(
                "cannot resolve HEAD: {}",
                e.message()
            ))),
        };
        unborn
    }

    fn git(&self, args: &[&str]) -> Result<Output> {
        debug!(?args, "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| GitverError::history_unavailable(format!("failed to run git: {}", e)))
    }
}

impl super::Repository for GitCliRepository {
    fn log(&self, until: Option<&str>) -> Result<Vec<u8>> {
        if self.is_unborn()? {
            debug!("HEAD has no commits yet");
            return Ok(Vec::new());
        }

        let range = until.map(|rev| format!("{}..HEAD", rev));
        let mut args = vec![
            "log",
            "--pretty=medium",
            "--no-decorate",
            "--no-color",
            "--log-size",
        ];
        if let Some(range) = range.as_deref() {
            args.push(range);
        }

        let output = self.git(&args)?;
        if !output.status.success() {
            return Err(GitverError::history_unavailable(format!(
                "git log failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        debug!(bytes = output.stdout.len(), "read git log");
        Ok(output.stdout)
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        let output = self.git(&["describe", "--tags", "--abbrev=0"])?;
        if !output.status.success() {
            // describe fails when no tag is reachable
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(stderr = %stderr.trim(), "git describe found no tag");
            return Ok(None);
        }

        let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if tag.is_empty() {
            return Ok(None);
        }
        Ok(Some(tag))
    }
}
