//! The three-way consistency gate.
//!
//! Compares the manifest, module, and tag versions by exact string equality
//! and reports every pair that disagrees. Pure logic, no I/O; the CLI runner
//! decides what to do with the report.

use std::fmt;

/// Where a version string was resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    Manifest,
    Module,
    Tag,
}

impl VersionSource {
    /// Stable lowercase label used in diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            VersionSource::Manifest => "manifest",
            VersionSource::Module => "module",
            VersionSource::Tag => "tag",
        }
    }
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The raw version triple being gated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersions {
    pub manifest: String,
    pub module: String,
    pub tag: String,
}

impl ResolvedVersions {
    /// Create a resolved triple
    pub fn new(
        manifest: impl Into<String>,
        module: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        ResolvedVersions {
            manifest: manifest.into(),
            module: module.into(),
            tag: tag.into(),
        }
    }

    /// Look up the value for a source
    pub fn get(&self, source: VersionSource) -> &str {
        match source {
            VersionSource::Manifest => &self.manifest,
            VersionSource::Module => &self.module,
            VersionSource::Tag => &self.tag,
        }
    }
}

/// One pair of sources whose versions disagree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub left: VersionSource,
    pub right: VersionSource,
    pub left_value: String,
    pub right_value: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} version '{}' does not match {} version '{}'",
            self.left, self.left_value, self.right, self.right_value
        )
    }
}

/// Outcome of a consistency check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub mismatches: Vec<Mismatch>,
}

impl CheckReport {
    /// Whether all three versions agreed
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare the resolved triple pairwise by exact string equality.
///
/// No semantic-version coercion is applied: "1.0" and "1.0.0" are unequal.
/// Every disagreeing pair appears in the report so the operator can see
/// which source is out of step.
pub fn check_consistency(versions: &ResolvedVersions) -> CheckReport {
    let pairs = [
        (VersionSource::Manifest, VersionSource::Module),
        (VersionSource::Manifest, VersionSource::Tag),
        (VersionSource::Module, VersionSource::Tag),
    ];

    let mismatches = pairs
        .iter()
        .filter(|(left, right)| versions.get(*left) != versions.get(*right))
        .map(|(left, right)| Mismatch {
            left: *left,
            right: *right,
            left_value: versions.get(*left).to_string(),
            right_value: versions.get(*right).to_string(),
        })
        .collect();

    CheckReport { mismatches }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equal_is_consistent() {
        let versions = ResolvedVersions::new("1.2.3", "1.2.3", "1.2.3");
        assert!(check_consistency(&versions).is_consistent());
    }

    #[test]
    fn test_module_differs() {
        let versions = ResolvedVersions::new("1.2.3", "1.2.4", "1.2.3");
        let report = check_consistency(&versions);
        assert!(!report.is_consistent());
        // manifest/module and module/tag disagree, manifest/tag agree
        assert_eq!(report.mismatches.len(), 2);
    }

    #[test]
    fn test_tag_differs() {
        let versions = ResolvedVersions::new("1.2.3", "1.2.3", "1.2.4");
        let report = check_consistency(&versions);
        assert_eq!(report.mismatches.len(), 2);
        assert!(report
            .mismatches
            .iter()
            .all(|m| m.right == VersionSource::Tag));
    }

    #[test]
    fn test_all_differ() {
        let versions = ResolvedVersions::new("1.0.0", "2.0.0", "3.0.0");
        let report = check_consistency(&versions);
        assert_eq!(report.mismatches.len(), 3);
    }

    #[test]
    fn test_comparison_is_textual() {
        // Semantically equal, textually different
        let versions = ResolvedVersions::new("1.0", "1.0.0", "1.0.0");
        let report = check_consistency(&versions);
        assert!(!report.is_consistent());
    }

    #[test]
    fn test_mismatch_display_names_pair() {
        let versions = ResolvedVersions::new("1.2.3", "1.2.3", "1.2.4");
        let report = check_consistency(&versions);
        let msg = report.mismatches[0].to_string();
        assert!(
            msg.contains("manifest") && msg.contains("tag"),
            "Mismatch message should name both sources, got: {}",
            msg
        );
        assert!(msg.contains("1.2.3") && msg.contains("1.2.4"));
    }

    #[test]
    fn test_resolved_versions_get() {
        let versions = ResolvedVersions::new("1.0.0", "2.0.0", "3.0.0");
        assert_eq!(versions.get(VersionSource::Manifest), "1.0.0");
        assert_eq!(versions.get(VersionSource::Module), "2.0.0");
        assert_eq!(versions.get(VersionSource::Tag), "3.0.0");
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(VersionSource::Manifest.label(), "manifest");
        assert_eq!(VersionSource::Module.label(), "module");
        assert_eq!(VersionSource::Tag.label(), "tag");
    }
}
