use git2::{ObjectType, Repository, Tree};
use std::path::Path;

use crate::error::{AppError, Result};
use crate::git::store::{find_commit, RepositoryStore};

/// Raw bytes of the blob at `path` inside `tree`. Anything that is not a
/// blob, directories included, counts as not found.
pub fn read_blob_at(repo: &Repository, tree: &Tree, path: &str) -> Result<Vec<u8>> {
    let not_found = || AppError::FileNotFound(path.to_string());

    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Err(not_found());
    }

    let entry = tree.get_path(Path::new(trimmed)).map_err(|_| not_found())?;
    if entry.kind() != Some(ObjectType::Blob) {
        return Err(not_found());
    }

    let obj = entry.to_object(repo)?;
    let blob = obj.as_blob().ok_or_else(not_found)?;

    Ok(blob.content().to_vec())
}

impl RepositoryStore {
    pub fn get_file_contents(&self, name: &str, hash: &str, path: &str) -> Result<Vec<u8>> {
        self.with_repo(name, |repo| {
            let commit = find_commit(repo, hash)?;
            let tree = commit.tree()?;
            read_blob_at(repo, &tree, path)
        })
    }
}
