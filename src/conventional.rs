use crate::config::Config;
use crate::domain::{ClassifiedCommit, RawCommit, RevisionMap};
use crate::error::{GitverError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// Header lines (Author, Date, blank) preceding the subject in a log block
pub const DEFAULT_HEADER_LINES: usize = 3;

/// Returns the default list of breaking change markers.
pub fn default_breaking_markers() -> Vec<String> {
    vec!["BREAKING CHANGE".to_string(), "BREAKING-CHANGE".to_string()]
}

// leading lowercase run followed by `(`, `!` or `:`
static TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([a-z]+)[(!:]").expect("type pattern is valid"));

// `type!:` or `type(scope)!:`
static BREAKING_SUBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[a-z]+(?:\([^)]*\))?!:").expect("breaking subject pattern is valid")
});

/// Turns raw log blocks into classified commits
pub struct Classifier {
    header_lines: usize,
    breaking_markers: Vec<String>,
}

impl Classifier {
    pub fn new(header_lines: usize, breaking_markers: Vec<String>) -> Self {
        Classifier {
            header_lines,
            breaking_markers,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.history.header_lines,
            config.classifier.breaking_markers.clone(),
        )
    }

    /// Classify every commit, keeping log order.
    ///
    /// When `include` is non-empty, commits whose type tag is not listed are
    /// dropped. Any commit whose subject has no type tag fails the whole
    /// classification.
    pub fn classify(
        &self,
        commits: &RevisionMap<RawCommit>,
        include: &HashSet<String>,
    ) -> Result<RevisionMap<ClassifiedCommit>> {
        let mut classified = RevisionMap::new();

        for (revision, raw) in commits.iter() {
            let commit = self.classify_commit(revision, raw)?;
            if !include.is_empty() && !include.contains(commit.base_type()) {
                debug!(revision, commit_type = commit.base_type(), "commit type not included");
                continue;
            }
            classified.push(revision, commit)?;
        }

        Ok(classified)
    }

    pub fn classify_commit(&self, revision: &str, raw: &RawCommit) -> Result<ClassifiedCommit> {
        let mut lines = raw.text().lines().skip(self.header_lines);

        let subject = lines.next().ok_or_else(|| {
            GitverError::classification(format!("commit {} has no subject line", revision))
        })?;

        let base_type = TYPE_RE
            .captures(subject)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| {
                GitverError::classification(format!(
                    "commit {} subject '{}' has no type tag",
                    revision,
                    subject.trim()
                ))
            })?;

        let is_breaking_change = BREAKING_SUBJECT_RE.is_match(subject)
            || lines.any(|line| {
                self.breaking_markers
                    .iter()
                    .any(|marker| line.contains(marker.as_str()))
            });

        Ok(ClassifiedCommit::new(
            revision,
            base_type,
            is_breaking_change,
            summary(subject),
        ))
    }
}

/// One-line summary of a subject: the text after the first colon, or the
/// whole subject when there is none
pub fn summary(subject: &str) -> &str {
    let subject = subject.trim();
    match subject.split_once(':') {
        Some((_, rest)) => rest.trim(),
        None => subject,
    }
}

/// Classify with the default header layout and breaking markers
pub fn classify(
    commits: &RevisionMap<RawCommit>,
    include: &HashSet<String>,
) -> Result<RevisionMap<ClassifiedCommit>> {
    Classifier::new(DEFAULT_HEADER_LINES, default_breaking_markers()).classify(commits, include)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(message: &str) -> RawCommit {
        let mut block = String::from("Author: A <a@example.com>\nDate:   Mon Jan 1 00:00:00 2024 +0000\n\n");
        for line in message.lines() {
            if !line.is_empty() {
                block.push_str("    ");
                block.push_str(line);
            }
            block.push('\n');
        }
        RawCommit::new(block)
    }

    fn classifier() -> Classifier {
        Classifier::new(DEFAULT_HEADER_LINES, default_breaking_markers())
    }

    #[test]
    fn test_builtin_patterns_compile() {
        assert!(TYPE_RE.is_match("feat: x"));
        assert!(BREAKING_SUBJECT_RE.is_match("feat(api)!: x"));
    }

    #[test]
    fn test_classify_plain_type() {
        let commit = classifier().classify_commit("abc", &raw("feat: add X")).unwrap();
        assert_eq!(commit.r#type, "feat");
        assert!(!commit.is_breaking_change);
        assert_eq!(commit.summary, "add X");
    }

    #[test]
    fn test_classify_with_scope() {
        let commit = classifier()
            .classify_commit("abc", &raw("fix(parser): handle empty input"))
            .unwrap();
        assert_eq!(commit.r#type, "fix");
        assert_eq!(commit.summary, "handle empty input");
    }

    #[test]
    fn test_breaking_footer_marks_commit() {
        let commit = classifier()
            .classify_commit("abc", &raw("fix: rename option\n\nBREAKING CHANGE: --foo is now --bar"))
            .unwrap();
        assert_eq!(commit.r#type, "fix!");
        assert_eq!(commit.base_type(), "fix");
        assert!(commit.is_breaking_change);
    }

    #[test]
    fn test_breaking_hyphen_marker_mid_body() {
        let commit = classifier()
            .classify_commit("abc", &raw("refactor: move\n\nsee BREAKING-CHANGE notes\n\nmore text"))
            .unwrap();
        assert_eq!(commit.r#type, "refactor!");
    }

    #[test]
    fn test_breaking_bang_in_subject() {
        let commit = classifier().classify_commit("abc", &raw("fix!: break V")).unwrap();
        assert_eq!(commit.r#type, "fix!");
        assert!(commit.is_breaking_change);

        let scoped = classifier()
            .classify_commit("abc", &raw("feat(api)!: drop v1"))
            .unwrap();
        assert_eq!(scoped.r#type, "feat!");
    }

    #[test]
    fn test_marker_in_subject_is_not_scanned() {
        let commit = classifier()
            .classify_commit("abc", &raw("docs: describe BREAKING CHANGE policy"))
            .unwrap();
        assert!(!commit.is_breaking_change);
        assert_eq!(commit.r#type, "docs");
    }

    #[test]
    fn test_unrecognized_subject_fails() {
        let err = classifier()
            .classify_commit("abc", &raw("weird commit message"))
            .unwrap_err();
        assert!(matches!(err, GitverError::Classification(_)));

        let err = classifier()
            .classify_commit("abc", &raw("Feat: capitalised"))
            .unwrap_err();
        assert!(matches!(err, GitverError::Classification(_)));
    }

    #[test]
    fn test_missing_subject_fails() {
        let err = classifier()
            .classify_commit("abc", &RawCommit::new("Author: A\nDate: x\n"))
            .unwrap_err();
        assert!(matches!(err, GitverError::Classification(_)));
    }

    #[test]
    fn test_include_filter_drops_other_types() {
        let mut commits = RevisionMap::new();
        commits.push("c3", raw("feat: add X")).unwrap();
        commits.push("c2", raw("chore: tidy")).unwrap();
        commits.push("c1", raw("fix: correct Y\n\nBREAKING CHANGE: yes")).unwrap();

        let include: HashSet<String> = ["feat", "fix"].iter().map(|s| s.to_string()).collect();
        let classified = classify(&commits, &include).unwrap();

        let revisions: Vec<&str> = classified.revisions().collect();
        assert_eq!(revisions, vec!["c3", "c1"]);
        assert_eq!(classified.get("c1").unwrap().r#type, "fix!");
    }

    #[test]
    fn test_empty_include_keeps_everything() {
        let mut commits = RevisionMap::new();
        commits.push("c2", raw("chore: tidy")).unwrap();
        commits.push("c1", raw("docs: readme")).unwrap();

        let classified = classify(&commits, &HashSet::new()).unwrap();
        assert_eq!(classified.len(), 2);
    }

    #[test]
    fn test_unparsable_commit_fails_even_if_excluded() {
        let mut commits = RevisionMap::new();
        commits.push("c2", raw("feat: add X")).unwrap();
        commits.push("c1", raw("weird commit message")).unwrap();

        let include: HashSet<String> = ["feat".to_string()].into_iter().collect();
        assert!(classify(&commits, &include).is_err());
    }

    #[test]
    fn test_custom_header_lines() {
        let classifier = Classifier::new(4, default_breaking_markers());
        let block = "Merge: aaa bbb\nAuthor: A\nDate:   x\n\n    fix: merge fix\n";
        let commit = classifier
            .classify_commit("abc", &RawCommit::new(block))
            .unwrap();
        assert_eq!(commit.r#type, "fix");
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary("    feat(x): add X  "), "add X");
        assert_eq!(summary("feat: a: b"), "a: b");
        assert_eq!(summary("  no colon here "), "no colon here");
    }
}
