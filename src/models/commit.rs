use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    pub message: String,
    #[serde(rename = "sha1")]
    pub hash: String,
}

impl CommitSummary {
    pub fn from_commit(commit: &git2::Commit) -> Self {
        Self {
            message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
            hash: commit.id().to_string(),
        }
    }
}
