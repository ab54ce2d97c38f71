//! User interface module - output formatting.
//!
//! The gate runs unattended in CI, so there is no interactive input here;
//! everything lives in `formatter` as pure display functions.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_check_report, display_error, display_resolved_versions,
    display_status, display_success,
};
