use crate::error::{Result, VersionGateError};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string (e.g., "1.2.3" -> Version(1,2,3))
    ///
    /// Pre-release and build metadata are rejected: the gate only compares
    /// plain major.minor.patch tokens.
    pub fn parse(text: &str) -> Result<Self> {
        let parsed = semver::Version::parse(text).map_err(|e| {
            VersionGateError::version(format!("Invalid version '{}': {}", text, e))
        })?;

        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(VersionGateError::version(format!(
                "Pre-release or build metadata not supported: '{}'",
                text
            )));
        }

        Ok(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
