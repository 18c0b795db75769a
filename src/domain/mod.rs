//! Domain logic - pure business rules independent of git operations

pub mod commit;
pub mod decision;
pub mod revision_map;
pub mod tag;
pub mod version;

pub use commit::{ClassifiedCommit, BREAKING_SUFFIX, FEAT, FIX};
pub use decision::BumpDecision;
pub use revision_map::{RawCommit, RevisionMap};
pub use tag::ReleaseTag;
pub use version::VersionBump;
