//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the repository
//! queries version-gate needs, allowing for a real implementation backed
//! by the `git2` crate and a mock implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The gate only reads:
//! it resolves HEAD and lists the tag references pointing at it, to supply
//! a tag reference when the run was not triggered by one.
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing.
//!
//! ```rust
//! # use version_gate::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let head = repo.head_oid()?;
//! let tags = repo.tag_refs_at(head)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Common git operation trait for abstraction
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::VersionGateError] variants.
pub trait Repository: Send + Sync {
    /// Get the OID of the commit at HEAD
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the HEAD commit
    /// * `Err` - If HEAD is unborn or there's a Git error
    fn head_oid(&self) -> Result<Oid>;

    /// Get the full names of all tag references pointing at an OID
    ///
    /// Annotated tags are peeled to the commit they target before comparison.
    ///
    /// # Arguments
    /// * `oid` - Commit to look up (typically HEAD)
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Full reference names (e.g., "refs/tags/1.2.3"), sorted
    /// * `Err` - If there's a Git error
    fn tag_refs_at(&self, oid: Oid) -> Result<Vec<String>>;
}

/// Collect the tag references pointing at HEAD, sorted by name.
///
/// Used when neither a `--git-ref` flag nor the `GITHUB_REF` environment
/// variable supplies the reference to gate against.
pub fn tags_at_head<R: Repository>(repo: &R) -> Result<Vec<String>> {
    let head = repo.head_oid()?;
    repo.tag_refs_at(head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_at_head_with_mock() {
        let oid = Oid::from_str("0123456789abcdef0123456789abcdef01234567").unwrap();
        let mut repo = MockRepository::new();
        repo.set_head(oid);
        repo.add_tag("1.2.3", oid);

        let tags = tags_at_head(&repo).unwrap();
        assert_eq!(tags, vec!["refs/tags/1.2.3".to_string()]);
    }

    #[test]
    fn test_tags_at_head_none_matching() {
        let head = Oid::from_str("0123456789abcdef0123456789abcdef01234567").unwrap();
        let other = Oid::from_str("89abcdef0123456789abcdef0123456789abcdef").unwrap();
        let mut repo = MockRepository::new();
        repo.set_head(head);
        repo.add_tag("1.0.0", other);

        let tags = tags_at_head(&repo).unwrap();
        assert!(tags.is_empty());
    }

    #[test]
    fn test_tags_at_head_sorted() {
        let oid = Oid::from_str("0123456789abcdef0123456789abcdef01234567").unwrap();
        let mut repo = MockRepository::new();
        repo.set_head(oid);
        repo.add_tag("2.0.0", oid);
        repo.add_tag("1.9.0", oid);

        let tags = tags_at_head(&repo).unwrap();
        assert_eq!(
            tags,
            vec![
                "refs/tags/1.9.0".to_string(),
                "refs/tags/2.0.0".to_string()
            ]
        );
    }
}
