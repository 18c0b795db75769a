use std::fmt;

/// Warnings about the edges of the history being analysed.
/// These are non-fatal and are reported to the user alongside the result.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The repository has no release tag; the whole history is read
    NoReleaseTag { initial_version: String },
    /// No commits after the boundary revision (release tag or `--since`)
    NoNewCommits { boundary: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoReleaseTag { initial_version } => {
                write!(
                    f,
                    "No release tag found, starting from {} over the full history",
                    initial_version
                )
            }
            BoundaryWarning::NoNewCommits { boundary } => {
                write!(f, "No new commits since '{}'", boundary)
            }
        }
    }
}
