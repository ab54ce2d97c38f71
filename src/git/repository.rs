use crate::error::{Result, VersionGateError};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn head_oid(&self) -> Result<Oid> {
        let head = self
            .repo
            .head()
            .map_err(|e| VersionGateError::git_ref(format!("Cannot resolve HEAD: {}", e)))?;

        let commit = head
            .peel_to_commit()
            .map_err(|e| VersionGateError::git_ref(format!("HEAD is not a commit: {}", e)))?;

        Ok(commit.id())
    }

    fn tag_refs_at(&self, oid: Oid) -> Result<Vec<String>> {
        let mut tags = Vec::new();

        for reference in self.repo.references_glob("refs/tags/*")? {
            let reference = reference?;

            let target = match reference.peel_to_commit() {
                Ok(commit) => commit.id(),
                // Tags pointing at non-commit objects can't match HEAD
                Err(_) => continue,
            };

            if target == oid {
                if let Some(name) = reference.name() {
                    tags.push(name.to_string());
                }
            }
        }

        tags.sort();
        Ok(tags)
    }
}
