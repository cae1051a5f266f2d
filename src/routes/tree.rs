use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::Result;
use crate::git::SharedStore;
use crate::models::DirtreeNode;
use crate::routes::ApiResponse;

pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route("/api/get_dirtree", get(get_dirtree))
        .route("/api/get_filecontents", get(get_file_contents))
        .with_state(store)
}

#[derive(Debug, Deserialize)]
struct TreeQuery {
    #[serde(default)]
    name: String,
    #[serde(default)]
    sha1: String,
}

async fn get_dirtree(
    State(store): State<SharedStore>,
    Query(query): Query<TreeQuery>,
) -> Result<Json<ApiResponse<DirtreeNode>>> {
    let tree = store.build_dirtree(&query.name, &query.sha1)?;
    Ok(Json(ApiResponse::new(tree)))
}

#[derive(Debug, Deserialize)]
struct FileQuery {
    #[serde(default)]
    name: String,
    #[serde(default)]
    sha1: String,
    #[serde(default)]
    path: String,
}

async fn get_file_contents(
    State(store): State<SharedStore>,
    Query(query): Query<FileQuery>,
) -> Result<Json<ApiResponse<String>>> {
    let bytes = store.get_file_contents(&query.name, &query.sha1, &query.path)?;
    // Non UTF-8 payloads are passed through lossily; JSON strings cannot carry raw bytes.
    let content = String::from_utf8_lossy(&bytes).into_owned();
    Ok(Json(ApiResponse::new(content)))
}
