use git2::{Oid, Repository, Sort};

use crate::error::Result;
use crate::git::store::{head_commit, RepositoryStore};
use crate::models::CommitSummary;

/// Every commit reachable from `head`, head first. Parents never appear
/// before their children; ties are broken newest first.
pub fn walk_history(repo: &Repository, head: Oid) -> Result<Vec<CommitSummary>> {
    let mut revwalk = repo.revwalk()?;
    revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
    revwalk.push(head)?;

    let mut commits = Vec::new();
    for oid in revwalk {
        let oid = oid?;
        let commit = repo.find_commit(oid)?;
        commits.push(CommitSummary::from_commit(&commit));
    }

    Ok(commits)
}

impl RepositoryStore {
    pub fn list_commits(&self, name: &str) -> Result<Vec<CommitSummary>> {
        self.with_repo(name, |repo| {
            let head = head_commit(repo, name)?;
            let commits = walk_history(repo, head.id())?;
            tracing::debug!("Listed {} commits for {}", commits.len(), name);
            Ok(commits)
        })
    }
}
