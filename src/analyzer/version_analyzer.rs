use crate::domain::{ClassifiedCommit, RevisionMap, VersionBump, FEAT, FIX};
use semver::Version;

/// Decides the version bump implied by a set of classified commits
pub struct VersionAnalyzer;

impl VersionAnalyzer {
    /// Determine which bump, if any, the commits call for.
    ///
    /// Precedence: any breaking commit, then any `feat`, then any `fix`.
    /// Breaking changes before 1.0.0 only bump the minor version. Commit
    /// order does not matter.
    pub fn analyze<'a, I>(start: &Version, commits: I) -> Option<VersionBump>
    where
        I: IntoIterator<Item = &'a ClassifiedCommit>,
    {
        let mut has_breaking = false;
        let mut has_features = false;
        let mut has_fixes = false;

        for commit in commits {
            if commit.is_breaking_change {
                has_breaking = true;
                break;
            }
            match commit.base_type() {
                FEAT => has_features = true,
                FIX => has_fixes = true,
                _ => {}
            }
        }

        if has_breaking {
            if start.major == 0 {
                Some(VersionBump::Minor)
            } else {
                Some(VersionBump::Major)
            }
        } else if has_features {
            Some(VersionBump::Minor)
        } else if has_fixes {
            Some(VersionBump::Patch)
        } else {
            None
        }
    }
}

/// Compute the version that follows `start` given the classified commits.
///
/// Returns `start` unchanged when no commit calls for a bump.
pub fn next_version(start: &Version, classified: &RevisionMap<ClassifiedCommit>) -> Version {
    match VersionAnalyzer::analyze(start, classified.values()) {
        Some(bump) => bump.apply(start),
        None => start.clone(),
    }
}
