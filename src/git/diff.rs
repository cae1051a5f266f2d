use git2::{DiffFormat, DiffOptions, Repository, Tree};

use crate::error::{AppError, Result};
use crate::git::store::{find_commit, RepositoryStore};

/// Render the difference between two trees as a unified patch.
pub fn render_patch(repo: &Repository, old_tree: &Tree, new_tree: &Tree) -> Result<String> {
    let mut opts = DiffOptions::new();
    opts.context_lines(3);

    let diff = repo.diff_tree_to_tree(Some(old_tree), Some(new_tree), Some(&mut opts))?;

    let mut patch = String::new();
    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        // File and hunk headers carry their own text; content lines need the
        // origin marker put back in front.
        if matches!(line.origin(), '+' | '-' | ' ') {
            patch.push(line.origin());
        }
        patch.push_str(&String::from_utf8_lossy(line.content()));
        true
    })?;

    Ok(patch)
}

impl RepositoryStore {
    /// Diff a commit against its first parent. The result always holds
    /// exactly one patch.
    pub fn get_diff(&self, name: &str, hash: &str) -> Result<Vec<String>> {
        self.with_repo(name, |repo| {
            let commit = find_commit(repo, hash)?;
            if commit.parent_count() == 0 {
                return Err(AppError::NoParent(hash.to_string()));
            }

            let parent = commit.parent(0)?;
            let patch = render_patch(repo, &parent.tree()?, &commit.tree()?)?;
            tracing::debug!("Rendered {} byte patch for {}@{}", patch.len(), name, hash);

            Ok(vec![patch])
        })
    }
}
