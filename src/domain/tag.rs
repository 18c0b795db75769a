use crate::error::{GitverError, Result};
use semver::Version;

/// A release tag together with the version it names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    pub name: String,
    pub version: Version,
}

impl ReleaseTag {
    /// Parse a tag name of the form `<prefix><semver>` (e.g. "v1.2.3")
    ///
    /// A missing prefix is a tag format error; a remainder that is not valid
    /// semver is an invalid version error.
    pub fn parse(name: &str, prefix: &str) -> Result<Self> {
        let remainder = name.strip_prefix(prefix).ok_or_else(|| {
            GitverError::tag_format(format!(
                "latest tag '{}' is not a version tag (expected prefix '{}')",
                name, prefix
            ))
        })?;

        let version = Version::parse(remainder).map_err(|e| {
            GitverError::invalid_version(format!(
                "latest tag '{}' is not valid SemVer: {}",
                name, e
            ))
        })?;

        Ok(ReleaseTag {
            name: name.to_string(),
            version,
        })
    }
}
