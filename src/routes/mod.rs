//! API route handlers - maps HTTP endpoints to repository operations.
//!
//! Each submodule defines routes for a feature area:
//! - `repositories`: List, create and delete repositories
//! - `commits`: Commit history from HEAD
//! - `diff`: Patch of a commit against its first parent
//! - `tree`: Directory tree and file content at a commit
//!
//! Successful responses are wrapped as `{"data": ...}`.

pub mod commits;
pub mod diff;
pub mod repositories;
pub mod tree;

use axum::Router;
use serde::{Deserialize, Serialize};

use crate::git::SharedStore;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

pub fn create_router(store: SharedStore) -> Router {
    Router::new()
        .merge(repositories::routes(store.clone()))
        .merge(commits::routes(store.clone()))
        .merge(diff::routes(store.clone()))
        .merge(tree::routes(store))
}
