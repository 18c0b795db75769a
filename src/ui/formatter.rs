//! Pure formatting functions for UI output.
//!
//! Builds the report text without printing it, so the exact layout can be
//! asserted in tests.

use crate::domain::{BumpDecision, ClassifiedCommit};

/// Render the human-readable summary of a bump decision.
///
/// An unchanged version renders as a single line. Otherwise a header is
/// followed by a `features:` and a `fixes:` section, each listing
/// `<short id> : <summary>` lines in log order. Empty sections keep their
/// header.
pub fn render_report(decision: &BumpDecision) -> String {
    if decision.is_unchanged() {
        return format!("version unchanged: {}\n", decision.previous);
    }

    let mut out = format!(
        "version bump needed: {} -> {}\n\n",
        decision.previous, decision.next
    );

    out.push_str("features:\n\n");
    for commit in decision.features() {
        out.push_str(&render_entry(commit));
    }

    out.push_str("\nfixes:\n\n");
    for commit in decision.fixes() {
        out.push_str(&render_entry(commit));
    }

    out
}

fn render_entry(commit: &ClassifiedCommit) -> String {
    format!("{} : {}\n", commit.short_revision(), commit.summary)
}
