//! Repository creation, deletion and listing.
//!
//! These are the only operations that touch the store root directly. A
//! request that is valid but changes nothing (repository already exists,
//! nothing to delete) reports `success: false` instead of an error.

use git2::Repository;

use crate::error::Result;
use crate::git::store::RepositoryStore;
use crate::models::LifecycleOutcome;

impl RepositoryStore {
    pub fn create_repository(&self, name: &str) -> Result<LifecycleOutcome> {
        let path = self.path_for(name)?;

        if path.exists() {
            tracing::info!("Repository {} already exists", name);
            return Ok(LifecycleOutcome::no_effect());
        }

        self.ensure_root()?;
        match Repository::init_bare(&path) {
            Ok(_) => {
                tracing::info!("Created repository {} at {}", name, path.display());
                Ok(LifecycleOutcome::applied())
            }
            Err(e) => {
                tracing::warn!("Failed to initialize {}: {}", path.display(), e);
                Ok(LifecycleOutcome::no_effect())
            }
        }
    }

    pub fn delete_repository(&self, name: &str) -> Result<LifecycleOutcome> {
        let path = self.path_for(name)?;

        if !path.exists() {
            return Ok(LifecycleOutcome::no_effect());
        }

        std::fs::remove_dir_all(&path)?;
        tracing::info!("Deleted repository {}", name);

        Ok(LifecycleOutcome::applied())
    }

    /// Names of the directories directly under the store root, sorted.
    pub fn list_repositories(&self) -> Result<Vec<String>> {
        if !self.root().is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(self.root())? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().to_string());
        }

        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::git::store::test_support::*;
    use crate::models::LifecycleOutcome;

    #[test]
    fn test_empty_name_is_rejected() {
        let (_temp, store) = temp_store();

        assert!(matches!(store.create_repository(""), Err(AppError::MissingName)));
        assert!(matches!(store.delete_repository(""), Err(AppError::MissingName)));
    }

    #[test]
    fn test_delete_nonexistent_is_not_an_error() {
        let (_temp, store) = temp_store();

        let outcome = store.delete_repository("nonexistent").unwrap();
        assert_eq!(outcome, LifecycleOutcome::no_effect());
    }

    #[test]
    fn test_create_then_delete() {
        let (_temp, store) = temp_store();

        assert!(store.create_repository("demo").unwrap().success);
        let repo = git2::Repository::open(repo_path(&store, "demo")).unwrap();
        assert!(repo.is_bare());
        drop(repo);

        assert!(store.delete_repository("demo").unwrap().success);
        assert!(!repo_path(&store, "demo").exists());
    }

    #[test]
    fn test_create_existing_reports_no_effect() {
        let (_temp, store) = temp_store();

        assert!(store.create_repository("demo").unwrap().success);
        assert!(!store.create_repository("demo").unwrap().success);
    }

    #[test]
    fn test_create_makes_missing_root() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = crate::git::RepositoryStore::new(temp.path().join("nested/repos"));

        assert!(store.create_repository("demo").unwrap().success);
        assert_eq!(store.list_repositories().unwrap(), vec!["demo"]);
    }

    #[test]
    fn test_path_traversal_is_rejected() {
        let (_temp, store) = temp_store();

        assert!(matches!(store.create_repository("../evil"), Err(AppError::InvalidName(_))));
        assert!(matches!(store.delete_repository(".."), Err(AppError::InvalidName(_))));
    }

    #[test]
    fn test_list_repositories_sorted_dirs_only() {
        let (temp, store) = temp_store();
        store.create_repository("zeta").unwrap();
        store.create_repository("alpha").unwrap();
        std::fs::write(temp.path().join("stray.txt"), "x").unwrap();

        assert_eq!(store.list_repositories().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_list_missing_root_is_empty() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = crate::git::RepositoryStore::new(temp.path().join("absent"));

        assert!(store.list_repositories().unwrap().is_empty());
    }
}
