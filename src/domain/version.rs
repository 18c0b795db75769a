use semver::Version;

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    /// Apply this bump to a version, producing a new one.
    ///
    /// Lower components reset to zero; pre-release and build metadata are
    /// always discarded.
    pub fn apply(self, version: &Version) -> Version {
        match self {
            VersionBump::Major => Version::new(version.major + 1, 0, 0),
            VersionBump::Minor => Version::new(version.major, version.minor + 1, 0),
            VersionBump::Patch => Version::new(version.major, version.minor, version.patch + 1),
        }
    }
}
