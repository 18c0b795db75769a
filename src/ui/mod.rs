//! User interface module - status output and report printing.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting of the report text
//! - This module - Printing, with status and errors styled on stderr

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::BumpDecision;

pub mod formatter;

pub use formatter::render_report;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print a boundary warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().bold(), warning);
}

/// Print the report for a decision to stdout.
pub fn display_report(decision: &BumpDecision) {
    print!("{}", render_report(decision));
}
