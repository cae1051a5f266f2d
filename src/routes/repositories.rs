//! Repository lifecycle endpoints.
//!
//! - GET /api/get_repositories
//!   Names of all repositories under the store root.
//!
//! - POST /api/create_repository (form: name)
//!   Initializes a bare repository. `success: false` if it already exists.
//!
//! - POST /api/delete_repository (form: name)
//!   Removes a repository. `success: false` if there was nothing to remove.
//!
//! The `name` field is read from a multipart or urlencoded body; requests
//! without a form body fall back to the query string.

use axum::{
    extract::{FromRequest, Multipart, Query, Request, State},
    http::header,
    routing::{get, post},
    Form, Json, Router,
};

use crate::error::{AppError, Result};
use crate::git::SharedStore;
use crate::models::{LifecycleOutcome, RepositoryNameForm};
use crate::routes::ApiResponse;

pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route("/api/get_repositories", get(list_repositories))
        .route("/api/create_repository", post(create_repository))
        .route("/api/delete_repository", post(delete_repository))
        .with_state(store)
}

/// The `name` form value of a lifecycle request. Absent means empty.
pub struct NameField(pub String);

impl<S> FromRequest<S> for NameField
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::InvalidForm(e.body_text()))?;

            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| AppError::InvalidForm(e.body_text()))?
            {
                if field.name() == Some("name") {
                    let name = field
                        .text()
                        .await
                        .map_err(|e| AppError::InvalidForm(e.body_text()))?;
                    return Ok(Self(name));
                }
            }
            return Ok(Self(String::new()));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(form) = Form::<RepositoryNameForm>::from_request(req, state)
                .await
                .map_err(|e| AppError::InvalidForm(e.body_text()))?;
            return Ok(Self(form.name));
        }

        let Query(form) = Query::<RepositoryNameForm>::try_from_uri(req.uri())
            .map_err(|e| AppError::InvalidForm(e.body_text()))?;
        Ok(Self(form.name))
    }
}

async fn list_repositories(
    State(store): State<SharedStore>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let names = store.list_repositories()?;
    Ok(Json(ApiResponse::new(names)))
}

async fn create_repository(
    State(store): State<SharedStore>,
    NameField(name): NameField,
) -> Result<Json<ApiResponse<LifecycleOutcome>>> {
    let outcome = store.create_repository(&name)?;
    Ok(Json(ApiResponse::new(outcome)))
}

async fn delete_repository(
    State(store): State<SharedStore>,
    NameField(name): NameField,
) -> Result<Json<ApiResponse<LifecycleOutcome>>> {
    let outcome = store.delete_repository(&name)?;
    Ok(Json(ApiResponse::new(outcome)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    use super::routes;
    use crate::git::store::test_support::temp_store;
    use crate::routes::test_support::{get, post_body, post_form};

    const BOUNDARY: &str = "----shelfboundary";

    fn multipart_name(name: &str) -> String {
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\n{name}\r\n--{b}--\r\n",
            b = BOUNDARY,
            name = name
        )
    }

    #[tokio::test]
    async fn test_create_list_delete() {
        let (_temp, store) = temp_store();
        let store = Arc::new(store);

        let (status, body) = post_form(routes(store.clone()), "/api/create_repository", "name=demo").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": { "success": true } }));

        let (_, body) = get(routes(store.clone()), "/api/get_repositories").await;
        assert_eq!(body, json!({ "data": ["demo"] }));

        let (_, body) = post_form(routes(store.clone()), "/api/delete_repository", "name=demo").await;
        assert_eq!(body, json!({ "data": { "success": true } }));

        let (_, body) = post_form(routes(store), "/api/delete_repository", "name=demo").await;
        assert_eq!(body, json!({ "data": { "success": false } }));
    }

    #[tokio::test]
    async fn test_multipart_create_and_delete() {
        let (_temp, store) = temp_store();
        let store = Arc::new(store);
        let content_type = format!("multipart/form-data; boundary={}", BOUNDARY);

        let (status, body) = post_body(
            routes(store.clone()),
            "/api/create_repository",
            Some(&content_type),
            &multipart_name("demo"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": { "success": true } }));
        assert_eq!(store.list_repositories().unwrap(), vec!["demo"]);

        let (status, body) = post_body(
            routes(store.clone()),
            "/api/delete_repository",
            Some(&content_type),
            &multipart_name("demo"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": { "success": true } }));
        assert!(store.list_repositories().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_name_is_bad_request() {
        let (_temp, store) = temp_store();
        let store = Arc::new(store);

        let (status, body) = post_form(routes(store.clone()), "/api/create_repository", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing `name` parameter" }));

        let (status, _) = post_form(routes(store.clone()), "/api/delete_repository", "name=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = post_body(routes(store), "/api/create_repository", None, "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing `name` parameter" }));
    }

    #[tokio::test]
    async fn test_name_from_query_without_body() {
        let (_temp, store) = temp_store();
        let store = Arc::new(store);

        let (status, body) = post_body(routes(store.clone()), "/api/create_repository?name=demo", None, "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": { "success": true } }));
        assert_eq!(store.list_repositories().unwrap(), vec!["demo"]);
    }
}
