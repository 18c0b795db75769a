use crate::error::{GitverError, Result};
use crate::git::Repository;
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct MockCommit {
    revision: String,
    message: String,
}

/// Mock repository for testing without actual git operations
///
/// Commits are added oldest first; `log` renders them newest first in the
/// same layout as `git log --no-decorate --log-size`.
pub struct MockRepository {
    commits: Vec<MockCommit>,
    /// Tag name and the index of the commit it points at
    tags: Vec<(String, usize)>,
    raw_log: Option<Vec<u8>>,
    unavailable: bool,
    log_requests: Mutex<Vec<Option<String>>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: Vec::new(),
            raw_log: None,
            unavailable: false,
            log_requests: Mutex::new(Vec::new()),
        }
    }

    /// Add a commit on top of the history
    pub fn add_commit(&mut self, revision: impl Into<String>, message: impl Into<String>) {
        self.commits.push(MockCommit {
            revision: revision.into(),
            message: message.into(),
        });
    }

    /// Tag the most recently added commit
    pub fn add_tag(&mut self, name: impl Into<String>) {
        let index = self.commits.len().saturating_sub(1);
        self.tags.push((name.into(), index));
    }

    /// Serve this exact text from `log` instead of rendering commits
    pub fn set_raw_log(&mut self, raw: impl Into<Vec<u8>>) {
        self.raw_log = Some(raw.into());
    }

    /// Make every query fail as if git could not be run
    pub fn set_unavailable(&mut self) {
        self.unavailable = true;
    }

    /// The `until` arguments `log` has been called with, in call order
    pub fn log_requests(&self) -> Vec<Option<String>> {
        self.log_requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn resolve(&self, revision: &str) -> Option<usize> {
        self.tags
            .iter()
            .rev()
            .find(|(name, _)| name == revision)
            .map(|(_, index)| *index)
            .or_else(|| self.commits.iter().position(|c| c.revision == revision))
    }

    fn render_block(message: &str) -> String {
        let mut block = String::from(
            "Author: Test User <test@example.com>\nDate:   Mon Jan 1 00:00:00 2024 +0000\n\n",
        );
        for line in message.lines() {
            if !line.is_empty() {
                block.push_str("    ");
                block.push_str(line);
            }
            block.push('\n');
        }
        block
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn log(&self, until: Option<&str>) -> Result<Vec<u8>> {
        if let Ok(mut requests) = self.log_requests.lock() {
            requests.push(until.map(str::to_string));
        }

        if self.unavailable {
            return Err(GitverError::history_unavailable("mock repository unavailable"));
        }
        if let Some(raw) = &self.raw_log {
            return Ok(raw.clone());
        }

        let start = match until {
            Some(revision) => match self.resolve(revision) {
                Some(index) => index + 1,
                None => {
                    return Err(GitverError::history_unavailable(format!(
                        "unknown revision '{}'",
                        revision
                    )))
                }
            },
            None => 0,
        };

        let records: Vec<String> = self.commits[start.min(self.commits.len())..]
            .iter()
            .rev()
            .map(|commit| {
                let block = Self::render_block(&commit.message);
                format!("commit {}\nlog size {}\n{}", commit.revision, block.len(), block)
            })
            .collect();

        Ok(records.join("\n").into_bytes())
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        if self.unavailable {
            return Err(GitverError::history_unavailable("mock repository unavailable"));
        }
        Ok(self.tags.last().map(|(name, _)| name.clone()))
    }
}
