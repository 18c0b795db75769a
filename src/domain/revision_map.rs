use crate::error::{GitverError, Result};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Opaque block of `git log` text for one revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    text: String,
}

impl RawCommit {
    pub fn new(text: impl Into<String>) -> Self {
        RawCommit { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Insertion-ordered map keyed by revision id.
///
/// Entries keep the order in which they were pushed, which for log output is
/// newest first. Revision ids are unique.
#[derive(Debug, Clone)]
pub struct RevisionMap<T> {
    entries: IndexMap<String, T>,
}

impl<T> RevisionMap<T> {
    pub fn new() -> Self {
        RevisionMap {
            entries: IndexMap::new(),
        }
    }

    /// Append an entry, rejecting a revision id that is already present
    pub fn push(&mut self, revision: impl Into<String>, value: T) -> Result<()> {
        match self.entries.entry(revision.into()) {
            Entry::Occupied(entry) => Err(GitverError::log_format(format!(
                "duplicate revision '{}' in history",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    pub fn get(&self, revision: &str) -> Option<&T> {
        self.entries.get(revision)
    }

    pub fn contains(&self, revision: &str) -> bool {
        self.entries.contains_key(revision)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(rev, value)| (rev.as_str(), value))
    }

    pub fn revisions(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

impl<T> Default for RevisionMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

// IndexMap equality ignores order; two histories are only equal in the same order
impl<T: PartialEq> PartialEq for RevisionMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RevisionMap<T> {}

impl<T> IntoIterator for RevisionMap<T> {
    type Item = (String, T);
    type IntoIter = indexmap::map::IntoIter<String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
