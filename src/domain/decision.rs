use super::commit::ClassifiedCommit;
use super::revision_map::RevisionMap;
use semver::Version;

/// Outcome of one run: where the version was, where it goes, and why
#[derive(Debug, Clone, PartialEq)]
pub struct BumpDecision {
    pub previous: Version,
    pub next: Version,
    /// Classified commits in log order (newest first)
    pub commits: Vec<ClassifiedCommit>,
}

impl BumpDecision {
    pub fn new(previous: Version, next: Version, classified: RevisionMap<ClassifiedCommit>) -> Self {
        BumpDecision {
            previous,
            next,
            commits: classified.into_iter().map(|(_, commit)| commit).collect(),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.next == self.previous
    }

    pub fn features(&self) -> impl Iterator<Item = &ClassifiedCommit> {
        self.commits.iter().filter(|c| c.is_feature())
    }

    pub fn fixes(&self) -> impl Iterator<Item = &ClassifiedCommit> {
        self.commits.iter().filter(|c| c.is_fix())
    }
}
