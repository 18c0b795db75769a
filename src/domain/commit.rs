/// Type tag of a feature commit
pub const FEAT: &str = "feat";

/// Type tag of a bug fix commit
pub const FIX: &str = "fix";

/// Suffix appended to the stored type tag of a breaking commit
pub const BREAKING_SUFFIX: char = '!';

/// A commit reduced to what the bump decision and the report need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCommit {
    pub revision: String,
    /// Type tag as stored, `!`-suffixed when breaking (e.g. "fix!")
    pub r#type: String,
    pub is_breaking_change: bool,
    pub summary: String,
}

impl ClassifiedCommit {
    pub fn new(
        revision: impl Into<String>,
        base_type: &str,
        is_breaking_change: bool,
        summary: impl Into<String>,
    ) -> Self {
        let r#type = if is_breaking_change {
            format!("{}{}", base_type, BREAKING_SUFFIX)
        } else {
            base_type.to_string()
        };

        ClassifiedCommit {
            revision: revision.into(),
            r#type,
            is_breaking_change,
            summary: summary.into(),
        }
    }

    /// Type tag without the breaking suffix
    pub fn base_type(&self) -> &str {
        self.r#type.trim_end_matches(BREAKING_SUFFIX)
    }

    pub fn is_feature(&self) -> bool {
        self.r#type.starts_with(FEAT)
    }

    pub fn is_fix(&self) -> bool {
        self.r#type.starts_with(FIX)
    }

    /// First 8 characters of the revision id
    pub fn short_revision(&self) -> &str {
        match self.revision.char_indices().nth(8) {
            Some((idx, _)) => &self.revision[..idx],
            None => &self.revision,
        }
    }
}
