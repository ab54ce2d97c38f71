use crate::error::{Result, VersionGateError};
use crate::git::Repository;
use git2::Oid;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    head: Option<Oid>,
    tags: HashMap<String, Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            head: None,
            tags: HashMap::new(),
        }
    }

    /// Set the HEAD commit
    pub fn set_head(&mut self, oid: Oid) {
        self.head = Some(oid);
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(format!("refs/tags/{}", name.into()), oid);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Oid> {
        self.head
            .ok_or_else(|| VersionGateError::git_ref("No HEAD set in mock repository"))
    }

    fn tag_refs_at(&self, oid: Oid) -> Result<Vec<String>> {
        let mut tags: Vec<String> = self
            .tags
            .iter()
            .filter(|(_, target)| **target == oid)
            .map(|(name, _)| name.clone())
            .collect();

        tags.sort();
        Ok(tags)
    }
}
