//! Version extraction from manifest and module files.
//!
//! Matches the assignment grammar used by packaging manifests
//! (`version = "1.2.3"`) and module metadata (`__version__ = "1.2.3"`).

use crate::error::{Result, VersionGateError};
use regex::Regex;
use std::fs;
use std::path::Path;

/// A version value pulled out of a text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedVersion {
    /// The captured major.minor.patch token
    pub value: String,
    /// How many matching assignments the file contained
    pub occurrences: usize,
}

/// Extract a version assigned to `key` from text content.
///
/// Scans for line-anchored assignments of the form `key = "X.Y.Z"` or
/// `key = 'X.Y.Z'`. The first match wins; `occurrences` reports the total
/// so callers can warn about duplicates.
///
/// # Arguments
/// * `content` - Text to scan
/// * `key` - Assignment key (e.g., "version", "__version__")
///
/// # Returns
/// * `Ok(ExtractedVersion)` - First matching value and occurrence count
/// * `Err` - If no assignment matching the key is present
pub fn extract_version(content: &str, key: &str) -> Result<ExtractedVersion> {
    let pattern = format!(
        r#"(?m)^\s*{}\s*=\s*["'](\d+\.\d+\.\d+)["']"#,
        regex::escape(key)
    );
    let re = Regex::new(&pattern)
        .map_err(|e| VersionGateError::extract(format!("Invalid key '{}': {}", key, e)))?;

    let mut matches = re.captures_iter(content);

    let first = matches
        .next()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            VersionGateError::extract(format!("No '{}' assignment found", key))
        })?;

    Ok(ExtractedVersion {
        value: first,
        occurrences: 1 + matches.count(),
    })
}

/// Extract a version assigned to `key` from a file on disk.
///
/// # Arguments
/// * `path` - File to read
/// * `key` - Assignment key to look for
///
/// # Returns
/// * `Ok(ExtractedVersion)` - First matching value and occurrence count
/// * `Err` - If the file cannot be read or contains no matching assignment
pub fn extract_version_from_file(path: &Path, key: &str) -> Result<ExtractedVersion> {
    let content = fs::read_to_string(path).map_err(|e| {
        VersionGateError::extract(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    extract_version(&content, key).map_err(|e| match e {
        VersionGateError::Extract(msg) => {
            VersionGateError::extract(format!("{} in '{}'", msg, path.display()))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_manifest_version() {
        let content = r#"
[project]
name = "hezar"
version = "1.2.3"
"#;
        let extracted = extract_version(content, "version").unwrap();
        assert_eq!(extracted.value, "1.2.3");
        assert_eq!(extracted.occurrences, 1);
    }

    #[test]
    fn test_extract_module_version() {
        let content = "__version__ = \"0.13.1\"\n";
        let extracted = extract_version(content, "__version__").unwrap();
        assert_eq!(extracted.value, "0.13.1");
    }

    #[test]
    fn test_extract_single_quotes() {
        let content = "__version__ = '1.0.0'\n";
        let extracted = extract_version(content, "__version__").unwrap();
        assert_eq!(extracted.value, "1.0.0");
    }

    #[test]
    fn test_extract_indented_assignment() {
        let content = "    version = \"2.0.1\"\n";
        let extracted = extract_version(content, "version").unwrap();
        assert_eq!(extracted.value, "2.0.1");
    }

    #[test]
    fn test_extract_missing_key() {
        let content = "name = \"hezar\"\n";
        let err = extract_version(content, "version").unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_extract_key_without_version_value() {
        // Assignment present but value is not X.Y.Z
        let content = "version = \"next\"\n";
        assert!(extract_version(content, "version").is_err());
    }

    #[test]
    fn test_extract_first_of_multiple() {
        let content = "version = \"1.0.0\"\nversion = \"2.0.0\"\n";
        let extracted = extract_version(content, "version").unwrap();
        assert_eq!(extracted.value, "1.0.0");
        assert_eq!(extracted.occurrences, 2);
    }

    #[test]
    fn test_extract_key_is_escaped() {
        // "__version__" must not be treated as regex syntax
        let content = "__version__ = \"1.2.3\"\n";
        assert!(extract_version(content, "__version__").is_ok());
    }

    #[test]
    fn test_extract_does_not_match_other_keys() {
        let content = "tool_version = \"9.9.9\"\nversion = \"1.2.3\"\n";
        let extracted = extract_version(content, "version").unwrap();
        assert_eq!(extracted.value, "1.2.3");
        assert_eq!(extracted.occurrences, 1);
    }

    #[test]
    fn test_extract_prerelease_suffix_ignored() {
        // Extraction captures the leading X.Y.Z; trailing pre-release text
        // is not part of the token
        let content = "version = \"1.2.3-rc1\"\n";
        let extracted = extract_version(content, "version").unwrap();
        assert_eq!(extracted.value, "1.2.3");
    }

    #[test]
    fn test_extract_from_missing_file() {
        let err =
            extract_version_from_file(Path::new("/nonexistent/pyproject.toml"), "version")
                .unwrap_err();
        assert!(err.to_string().contains("pyproject.toml"));
    }
}
