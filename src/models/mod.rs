//! Data transfer objects (DTOs) for API responses.
//!
//! These structs are serialized to JSON for frontend consumption.
//! - `commit`: CommitSummary
//! - `tree`: DirtreeNode, the nested directory structure of a commit
//! - `repository`: LifecycleOutcome, RepositoryNameForm for create/delete

pub mod commit;
pub mod repository;
pub mod tree;

pub use commit::*;
pub use repository::*;
pub use tree::*;
