use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::Result;
use crate::git::SharedStore;
use crate::routes::ApiResponse;

pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route("/api/get_diffs", get(get_diffs))
        .with_state(store)
}

#[derive(Debug, Deserialize)]
struct DiffQuery {
    #[serde(default)]
    name: String,
    #[serde(default)]
    sha1: String,
}

async fn get_diffs(
    State(store): State<SharedStore>,
    Query(query): Query<DiffQuery>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let diffs = store.get_diff(&query.name, &query.sha1)?;
    Ok(Json(ApiResponse::new(diffs)))
}
