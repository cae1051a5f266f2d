//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` enum for all error conditions and implements Axum's
//! `IntoResponse` to automatically convert errors to appropriate HTTP responses
//! with JSON error bodies.
//!
//! Error mappings:
//! - `RepositoryNotFound`, `CommitNotFound`, `NoCommits`, `FileNotFound` → 404
//! - `NoParent`, `MissingName`, `InvalidName`, `InvalidForm` → 400
//! - `Git`, `StoreIo` → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    #[error("Commit not found: {0}")]
    CommitNotFound(String),

    #[error("Repository has no commits: {0}")]
    NoCommits(String),

    #[error("Commit has no parent: {0}")]
    NoParent(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Missing `name` parameter")]
    MissingName,

    #[error("Invalid repository name: {0}")]
    InvalidName(String),

    #[error("Invalid form body: {0}")]
    InvalidForm(String),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Store I/O error: {0}")]
    StoreIo(#[from] std::io::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::RepositoryNotFound(_)
            | AppError::CommitNotFound(_)
            | AppError::NoCommits(_)
            | AppError::FileNotFound(_) => StatusCode::NOT_FOUND,
            AppError::NoParent(_)
            | AppError::MissingName
            | AppError::InvalidName(_)
            | AppError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            AppError::Git(_) | AppError::StoreIo(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
