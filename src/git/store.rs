//! Named repository store.
//!
//! Every repository lives in its own directory under a single root:
//! `<root>/<name>`. Nothing is cached between operations; `with_repo` opens
//! the repository, hands it to the closure, and drops the handle on return.

use git2::{Commit, Oid, Repository};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct RepositoryStore {
    root: PathBuf,
}

pub type SharedStore = Arc<RepositoryStore>;

impl RepositoryStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist yet.
    pub fn ensure_root(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Location of a repository. The name must be a single path segment.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() {
            return Err(AppError::MissingName);
        }
        validate_name(name)?;
        Ok(self.root.join(name))
    }

    pub fn open(&self, name: &str) -> Result<Repository> {
        let path = match self.path_for(name) {
            Ok(path) => path,
            Err(AppError::MissingName) | Err(AppError::InvalidName(_)) => {
                return Err(AppError::RepositoryNotFound(name.to_string()));
            }
            Err(e) => return Err(e),
        };

        if !path.is_dir() {
            return Err(AppError::RepositoryNotFound(name.to_string()));
        }

        Repository::open(&path).map_err(|e| {
            tracing::debug!("Failed to open {}: {}", path.display(), e);
            AppError::RepositoryNotFound(name.to_string())
        })
    }

    pub fn with_repo<F, T>(&self, name: &str, f: F) -> Result<T>
    where
        F: FnOnce(&Repository) -> Result<T>,
    {
        let repo = self.open(name)?;
        f(&repo)
    }
}

fn validate_name(name: &str) -> Result<()> {
    let invalid = name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');

    if invalid {
        Err(AppError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}

/// Resolve the commit HEAD points at.
pub fn head_commit<'r>(repo: &'r Repository, name: &str) -> Result<Commit<'r>> {
    repo.head()
        .and_then(|head| head.peel_to_commit())
        .map_err(|_| AppError::NoCommits(name.to_string()))
}

/// Resolve a full hex hash to a commit.
pub fn find_commit<'r>(repo: &'r Repository, hash: &str) -> Result<Commit<'r>> {
    let oid = Oid::from_str(hash).map_err(|_| AppError::CommitNotFound(hash.to_string()))?;
    repo.find_commit(oid)
        .map_err(|_| AppError::CommitNotFound(hash.to_string()))
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_open_missing_repository() {
        let (_temp, store) = temp_store();

        let Err(err) = store.open("nope") else {
            panic!("expected missing repository to fail");
        };
        assert!(matches!(err, AppError::RepositoryNotFound(name) if name == "nope"));
    }

    #[test]
    fn test_open_rejects_escaping_names() {
        let (_temp, store) = temp_store();

        assert!(matches!(store.open(".."), Err(AppError::RepositoryNotFound(_))));
        assert!(matches!(store.open("a/b"), Err(AppError::RepositoryNotFound(_))));
        assert!(matches!(store.path_for("../x"), Err(AppError::InvalidName(_))));
        assert!(matches!(store.path_for(""), Err(AppError::MissingName)));
    }

    #[test]
    fn test_head_of_empty_repository() {
        let (_temp, store) = temp_store();
        init_repo(&store, "empty");

        let err = store
            .with_repo("empty", |repo| head_commit(repo, "empty").map(|c| c.id()))
            .unwrap_err();
        assert!(matches!(err, AppError::NoCommits(_)));
    }

    #[test]
    fn test_find_commit_by_hash() {
        let (_temp, store) = temp_store();
        let repo = init_repo(&store, "demo");
        let oid = commit_files(&repo, "init", &[("a.txt", "a\n")], 0);

        let found = store
            .with_repo("demo", |repo| find_commit(repo, &oid.to_string()).map(|c| c.id()))
            .unwrap();
        assert_eq!(found, oid);

        let err = store
            .with_repo("demo", |repo| find_commit(repo, "not-a-hash").map(|c| c.id()))
            .unwrap_err();
        assert!(matches!(err, AppError::CommitNotFound(_)));
    }
}
