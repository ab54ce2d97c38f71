use std::fmt;

/// Warnings that occur while resolving the version triple.
/// These are non-fatal issues that should be reported to the user;
/// under deny-warnings they fail the gate.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The triggering reference is not a tag reference
    NotATagRef { reference: String },
    /// A file contains more than one matching version assignment
    MultipleVersionKeys {
        path: String,
        key: String,
        count: usize,
    },
    /// Tag short name doesn't match the configured pattern
    TagMismatchPattern { tag: String, pattern: String },
    /// The tag-side value cannot be parsed as a semantic version
    UnparsableTag { tag: String, reason: String },
    /// Repository detection found several tags at HEAD
    MultipleTagsAtHead { count: usize, chosen: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NotATagRef { reference } => {
                write!(
                    f,
                    "Reference '{}' is not a tag reference; using its suffix anyway",
                    reference
                )
            }
            BoundaryWarning::MultipleVersionKeys { path, key, count } => {
                write!(
                    f,
                    "Found {} '{}' assignments in '{}'; using the first",
                    count, key, path
                )
            }
            BoundaryWarning::TagMismatchPattern { tag, pattern } => {
                write!(f, "Tag '{}' does not match pattern '{}'", tag, pattern)
            }
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::MultipleTagsAtHead { count, chosen } => {
                write!(f, "{} tags point at HEAD; using '{}'", count, chosen)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_tag_ref_display() {
        let warning = BoundaryWarning::NotATagRef {
            reference: "refs/heads/main".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("refs/heads/main"));
        assert!(msg.contains("not a tag reference"));
    }

    #[test]
    fn test_multiple_version_keys_display() {
        let warning = BoundaryWarning::MultipleVersionKeys {
            path: "pyproject.toml".to_string(),
            key: "version".to_string(),
            count: 2,
        };
        let msg = warning.to_string();
        assert!(msg.contains("2"));
        assert!(msg.contains("pyproject.toml"));
    }

    #[test]
    fn test_unparsable_tag_display() {
        let warning = BoundaryWarning::UnparsableTag {
            tag: "nightly".to_string(),
            reason: "not a version".to_string(),
        };
        assert!(warning.to_string().contains("nightly"));
    }
}
