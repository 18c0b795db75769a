//! Commit history reader
//!
//! Reads `git log --log-size` output into a [RevisionMap] of raw commits.
//! Each record is a `commit <id>` line, a `log size <n>` line, exactly `n`
//! bytes of message block and a blank separator line (absent after the last
//! record). Any deviation is a [GitverError::LogFormat] error.

use crate::domain::{RawCommit, RevisionMap};
use crate::error::{GitverError, Result};
use crate::git::Repository;
use tracing::debug;

const REVISION_PREFIX: &str = "commit ";
const LOG_SIZE_PREFIX: &str = "log size ";

/// Read the commits newer than `until` (exclusive), newest first
///
/// # Arguments
/// * `repo` - Repository to query
/// * `until` - Optional boundary revision; `None` reads the whole history
///
/// # Returns
/// * `Ok(RevisionMap)` - Raw commits keyed by revision id, newest first
/// * `Err` - [GitverError::HistoryUnavailable] if git could not be queried,
///   [GitverError::LogFormat] if its output is malformed
pub fn read_history<R: Repository + ?Sized>(
    repo: &R,
    until: Option<&str>,
) -> Result<RevisionMap<RawCommit>> {
    let output = repo.log(until)?;
    let commits = parse_log(&output)?;
    debug!(count = commits.len(), until = ?until, "read commit history");
    Ok(commits)
}

/// Parse raw `git log --no-decorate --log-size` output
pub fn parse_log(output: &[u8]) -> Result<RevisionMap<RawCommit>> {
    let mut commits = RevisionMap::new();
    let mut cursor = LogCursor::new(output);

    while let Some(line) = cursor.next_line() {
        let revision = parse_revision_line(line)?;

        let size_line = cursor.next_line().ok_or_else(|| {
            GitverError::log_format(format!("commit {} has no log size header", revision))
        })?;
        let size = parse_log_size_line(size_line, &revision)?;

        let block = cursor.take(size).ok_or_else(|| {
            GitverError::log_format(format!(
                "commit {} declares {} bytes but only {} remain",
                revision,
                size,
                cursor.remaining()
            ))
        })?;
        let text = String::from_utf8_lossy(block).into_owned();
        commits.push(revision.clone(), RawCommit::new(text))?;

        match cursor.next_line() {
            None => break,
            Some(separator) if separator.is_empty() => {}
            Some(other) => {
                return Err(GitverError::log_format(format!(
                    "expected blank line after commit {}, found '{}'",
                    revision,
                    String::from_utf8_lossy(other)
                )))
            }
        }
    }

    Ok(commits)
}

fn parse_revision_line(line: &[u8]) -> Result<String> {
    let line = String::from_utf8_lossy(line);
    let revision = line
        .strip_prefix(REVISION_PREFIX)
        .filter(|rev| !rev.is_empty() && rev.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')))
        .ok_or_else(|| GitverError::log_format(format!("invalid revision line '{}'", line)))?;
    Ok(revision.to_string())
}

fn parse_log_size_line(line: &[u8], revision: &str) -> Result<usize> {
    let line = String::from_utf8_lossy(line);
    line.strip_prefix(LOG_SIZE_PREFIX)
        .filter(|size| !size.is_empty() && size.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|size| size.parse::<usize>().ok())
        .ok_or_else(|| {
            GitverError::log_format(format!(
                "invalid log size header '{}' for commit {}",
                line, revision
            ))
        })
}

/// Byte cursor over log output supporting line reads and exact-length reads
struct LogCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> LogCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        LogCursor { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Next line without its terminating newline
    fn next_line(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.data.len() {
            return None;
        }
        let rest = &self.data[self.pos..];
        match rest.iter().position(|&b| b == b'\n') {
            Some(end) => {
                self.pos += end + 1;
                Some(&rest[..end])
            }
            None => {
                self.pos = self.data.len();
                Some(rest)
            }
        }
    }

    fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(len)?;
        if end > self.data.len() {
            return None;
        }
        let chunk = &self.data[self.pos..end];
        self.pos = end;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    fn record(revision: &str, block: &str) -> String {
        format!("commit {}\nlog size {}\n{}", revision, block.len(), block)
    }

    const BLOCK_A: &str = "Author: A <a@example.com>\nDate:   Mon Jan 1 00:00:00 2024 +0000\n\n    feat: add X\n";
    const BLOCK_B: &str = "Author: B <b@example.com>\nDate:   Tue Jan 2 00:00:00 2024 +0000\n\n    fix: correct Y\n\n    details\n";

    #[test]
    fn test_parse_two_records() {
        let log = format!("{}\n{}", record("aaaa1111", BLOCK_A), record("bbbb2222", BLOCK_B));
        let commits = parse_log(log.as_bytes()).unwrap();

        assert_eq!(commits.len(), 2);
        let revisions: Vec<&str> = commits.revisions().collect();
        assert_eq!(revisions, vec!["aaaa1111", "bbbb2222"]);
        assert_eq!(commits.get("bbbb2222").unwrap().text(), BLOCK_B);
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_log(b"").unwrap().is_empty());
    }

    #[test]
    fn test_parse_uses_declared_length_not_delimiters() {
        // message text that itself looks like a record header
        let block = "Author: A <a@example.com>\nDate:   x\n\n    docs: explain\n\ncommit ffff\nlog size 3\n";
        let log = format!("{}\n{}", record("aaaa", block), record("bbbb", BLOCK_A));
        let commits = parse_log(log.as_bytes()).unwrap();

        assert_eq!(commits.len(), 2);
        assert_eq!(commits.get("aaaa").unwrap().text(), block);
    }

    #[test]
    fn test_parse_multibyte_message() {
        let block = "Author: Zoë <z@example.com>\nDate:   x\n\n    feat: add café\n";
        let log = record("abcdef", block);
        let commits = parse_log(log.as_bytes()).unwrap();
        assert_eq!(commits.get("abcdef").unwrap().text(), block);
    }

    #[test]
    fn test_invalid_revision_line() {
        let log = record("XYZ123", BLOCK_A);
        let err = parse_log(log.as_bytes()).unwrap_err();
        assert!(matches!(err, GitverError::LogFormat(_)));

        let decorated = format!("commit abcd (HEAD -> main)\nlog size {}\n{}", BLOCK_A.len(), BLOCK_A);
        assert!(matches!(
            parse_log(decorated.as_bytes()).unwrap_err(),
            GitverError::LogFormat(_)
        ));
    }

    #[test]
    fn test_missing_log_size() {
        let log = format!("commit abcd\n{}", BLOCK_A);
        let err = parse_log(log.as_bytes()).unwrap_err();
        assert!(matches!(err, GitverError::LogFormat(_)));

        let err = parse_log(b"commit abcd").unwrap_err();
        assert!(matches!(err, GitverError::LogFormat(_)));
    }

    #[test]
    fn test_malformed_log_size() {
        let log = format!("commit abcd\nlog size many\n{}", BLOCK_A);
        let err = parse_log(log.as_bytes()).unwrap_err();
        assert!(matches!(err, GitverError::LogFormat(_)));
    }

    #[test]
    fn test_truncated_block() {
        let log = format!("commit abcd\nlog size {}\n{}", BLOCK_A.len() + 10, BLOCK_A);
        let err = parse_log(log.as_bytes()).unwrap_err();
        assert!(matches!(err, GitverError::LogFormat(_)));
    }

    #[test]
    fn test_missing_separator() {
        let log = format!("{}{}", record("aaaa", BLOCK_A), record("bbbb", BLOCK_B));
        let err = parse_log(log.as_bytes()).unwrap_err();
        assert!(matches!(err, GitverError::LogFormat(_)));
    }

    #[test]
    fn test_duplicate_revision() {
        let log = format!("{}\n{}", record("aaaa", BLOCK_A), record("aaaa", BLOCK_B));
        let err = parse_log(log.as_bytes()).unwrap_err();
        assert!(matches!(err, GitverError::LogFormat(_)));
    }

    #[test]
    fn test_parse_long_history() {
        let log: Vec<String> = (0..100_000)
            .map(|i| record(&format!("{:040x}", i), BLOCK_A))
            .collect();
        let commits = parse_log(log.join("\n").as_bytes()).unwrap();

        assert_eq!(commits.len(), 100_000);
        assert_eq!(commits.revisions().next(), Some(format!("{:040x}", 0).as_str()));
        assert!(commits.contains(&format!("{:040x}", 99_999)));
    }

    #[test]
    fn test_read_history_from_mock() {
        let mut repo = MockRepository::new();
        repo.add_commit("aaaa", "chore: init");
        repo.add_tag("v1.0.0");
        repo.add_commit("bbbb", "fix: correct Y");
        repo.add_commit("cccc", "feat: add X");

        let commits = read_history(&repo, Some("v1.0.0")).unwrap();
        let revisions: Vec<&str> = commits.revisions().collect();
        assert_eq!(revisions, vec!["cccc", "bbbb"]);
    }

    #[test]
    fn test_read_history_unavailable() {
        let mut repo = MockRepository::new();
        repo.set_unavailable();
        let err = read_history(&repo, None).unwrap_err();
        assert!(matches!(err, GitverError::HistoryUnavailable(_)));
    }
}
