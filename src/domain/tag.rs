use crate::error::{Result, VersionGateError};

/// A source-control reference, as delivered by the triggering event
/// (e.g., "refs/tags/1.2.3") or discovered from a local repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub reference: String,
}

impl TagRef {
    /// Create a new tag reference from a string
    pub fn new(reference: impl Into<String>) -> Self {
        TagRef {
            reference: reference.into(),
        }
    }

    /// Whether the reference lives under refs/tags/
    pub fn is_tag(&self) -> bool {
        self.reference.starts_with("refs/tags/")
    }

    /// The suffix after the last '/' (e.g., "refs/tags/1.2.3" -> "1.2.3")
    ///
    /// A reference without any '/' is returned unchanged.
    pub fn short_name(&self) -> &str {
        match self.reference.rsplit_once('/') {
            Some((_, suffix)) => suffix,
            None => &self.reference,
        }
    }
}

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &str) -> String {
        self.pattern.replace("{version}", version)
    }

    /// Extract the version part of a tag matching this pattern
    /// Example: pattern="v{version}", tag="v1.2.3" -> Some("1.2.3")
    ///
    /// Returns `None` when the tag does not match the pattern.
    pub fn extract(&self, tag: &str) -> Result<Option<String>> {
        if !self.pattern.contains("{version}") {
            return Err(VersionGateError::config(
                "Tag pattern must contain {version} placeholder",
            ));
        }

        // Create regex pattern: escape everything, replace {version} with regex
        let escaped = regex::escape(&self.pattern);
        let regex_pattern = escaped.replace(r"\{version\}", r"(\d+\.\d+\.\d+)");

        let re = regex::Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|_| VersionGateError::config("Invalid tag pattern"))?;

        Ok(re
            .captures(tag)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()))
    }
}
