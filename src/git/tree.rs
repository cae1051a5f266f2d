use git2::{ObjectType, Oid, Repository, Tree};

use crate::error::Result;
use crate::git::store::{find_commit, RepositoryStore};
use crate::models::DirtreeNode;

/// Deepest directory nesting the walk descends into.
pub const MAX_TREE_DEPTH: usize = 1024;

/// Collect the path of every non-directory entry below `tree`, pre-order, in
/// the store's entry order. Entries that cannot be resolved are skipped.
pub fn walk_tree_paths(repo: &Repository, tree: &Tree) -> Vec<String> {
    walk_tree_paths_to_depth(repo, tree, MAX_TREE_DEPTH)
}

/// Like `walk_tree_paths`, but subtrees nested deeper than `max_depth`
/// directory levels are skipped.
pub fn walk_tree_paths_to_depth(repo: &Repository, tree: &Tree, max_depth: usize) -> Vec<String> {
    fn walk(
        repo: &Repository,
        tree: &Tree,
        base_path: &str,
        max_depth: usize,
        ancestors: &mut Vec<Oid>,
        out: &mut Vec<String>,
    ) {
        for entry in tree.iter() {
            let Some(name) = entry.name() else {
                tracing::warn!("Skipping non UTF-8 entry {} under '{}'", entry.id(), base_path);
                continue;
            };
            let path = if base_path.is_empty() {
                name.to_string()
            } else {
                format!("{}/{}", base_path, name)
            };

            if entry.kind() != Some(ObjectType::Tree) {
                out.push(path);
                continue;
            }

            if ancestors.contains(&entry.id()) {
                tracing::warn!("Skipping self-referential tree at {}", path);
                continue;
            }

            // ancestors holds the root plus every directory entered so far
            if ancestors.len() >= max_depth {
                tracing::warn!("Skipping tree at {}: nested deeper than {}", path, max_depth);
                continue;
            }

            let subtree = match entry.to_object(repo).and_then(|obj| obj.peel_to_tree()) {
                Ok(subtree) => subtree,
                Err(e) => {
                    tracing::warn!("Skipping unreadable tree at {}: {}", path, e);
                    continue;
                }
            };

            ancestors.push(entry.id());
            walk(repo, &subtree, &path, max_depth, ancestors, out);
            ancestors.pop();
        }
    }

    let mut ancestors = vec![tree.id()];
    let mut out = Vec::new();
    walk(repo, tree, "", max_depth, &mut ancestors, &mut out);
    out
}

impl RepositoryStore {
    pub fn build_dirtree(&self, name: &str, hash: &str) -> Result<DirtreeNode> {
        self.with_repo(name, |repo| {
            let commit = find_commit(repo, hash)?;
            let tree = commit.tree()?;

            let paths = walk_tree_paths(repo, &tree);
            tracing::debug!("Building dirtree for {}@{} from {} paths", name, hash, paths.len());

            Ok(DirtreeNode::from_paths(&paths))
        })
    }
}
