use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::Result;
use crate::git::SharedStore;
use crate::models::CommitSummary;
use crate::routes::ApiResponse;

pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route("/api/get_commits", get(get_commits))
        .with_state(store)
}

#[derive(Debug, Deserialize)]
struct CommitsQuery {
    #[serde(default)]
    name: String,
}

async fn get_commits(
    State(store): State<SharedStore>,
    Query(query): Query<CommitsQuery>,
) -> Result<Json<ApiResponse<Vec<CommitSummary>>>> {
    let commits = store.list_commits(&query.name)?;
    Ok(Json(ApiResponse::new(commits)))
}
