//! Pure formatting functions for UI output.
//!
//! Functions here are pure (no I/O side effects beyond printing) and testable.

use crate::boundary::BoundaryWarning;
use crate::check::{CheckReport, ResolvedVersions};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
///
/// # Arguments
/// * `warning` - The boundary warning to display
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Display the resolved version triple.
///
/// # Arguments
/// * `versions` - The manifest, module, and tag versions being gated
pub fn display_resolved_versions(versions: &ResolvedVersions) {
    println!("\n\x1b[1mResolved versions:\x1b[0m");
    println!("  manifest: {}", versions.manifest);
    println!("  module:   {}", versions.module);
    println!("  tag:      {}", versions.tag);
}

/// Display every mismatching pair from a check report.
///
/// Prints nothing for a consistent report.
///
/// # Arguments
/// * `report` - The check report to display
pub fn display_check_report(report: &CheckReport) {
    for mismatch in &report.mismatches {
        display_error(&format!("Version mismatch: {}", mismatch));
    }
}
