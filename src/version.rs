use crate::domain::ReleaseTag;
use crate::error::Result;
use crate::git::Repository;
use tracing::debug;

/// Finds the latest release tag and the version it names.
///
/// # Arguments
/// * `repo` - Repository to query
/// * `prefix` - Literal prefix release tags carry (normally "v")
///
/// # Returns
/// * `Ok(Some(ReleaseTag))` - The latest tag, parsed
/// * `Ok(None)` - If the repository has no tags yet
/// * `Err` - If the latest tag lacks the prefix ([crate::GitverError::TagFormat])
///   or is not valid SemVer ([crate::GitverError::InvalidVersion])
pub fn latest_version<R: Repository + ?Sized>(
    repo: &R,
    prefix: &str,
) -> Result<Option<ReleaseTag>> {
    let Some(tag) = repo.latest_tag()? else {
        debug!("no release tag found");
        return Ok(None);
    };

    let release = ReleaseTag::parse(&tag, prefix)?;
    debug!(tag = %release.name, version = %release.version, "resolved latest release");
    Ok(Some(release))
}
