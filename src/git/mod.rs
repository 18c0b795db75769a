//! Git operations abstraction layer
//!
//! The version computation only needs two read-only queries from git: the
//! structured commit log and the most recent tag. Both live behind the
//! [Repository] trait so the rest of the pipeline can run against either a
//! real repository or an in-memory fixture.
//!
//! - [repository::GitCliRepository]: runs the `git` binary inside a
//!   repository located with `git2`
//! - [mock::MockRepository]: renders canned commits in `git log` layout
//!
//! ```rust
//! # use gitver::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> gitver::Result<()> {
//! let tag = repo.latest_tag()?;
//! let log = repo.log(tag.as_deref())?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::GitCliRepository;

use crate::error::Result;

/// Read-only git queries needed to compute the next version
///
/// ## Error Handling
///
/// A query that cannot be executed at all (missing `git` binary, not a
/// repository, git exiting with an error) maps to
/// [crate::error::GitverError::HistoryUnavailable]. "No tag yet" is not an
/// error and is reported as `Ok(None)`.
pub trait Repository: Send + Sync {
    /// Raw output of `git log --no-decorate --log-size`, newest first
    ///
    /// # Arguments
    /// * `until` - Optional revision to stop at (exclusive); only commits
    ///   introduced after it are returned
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - Log bytes, one record per commit
    /// * `Err` - If git could not produce the log
    fn log(&self, until: Option<&str>) -> Result<Vec<u8>>;

    /// Most recent tag reachable from HEAD (`git describe --tags --abbrev=0`)
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - Name of the latest tag
    /// * `Ok(None)` - If the repository has no tags yet
    /// * `Err` - If git could not be invoked
    fn latest_tag(&self) -> Result<Option<String>>;
}
