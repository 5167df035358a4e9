//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::{error_body, errors_body};

/// Body used by every method fallback.
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred while processing your request.";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid database url: {0}")]
    DatabaseUrl(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(String),
    #[error("validation: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("{0}")]
    BadRequest(String),
    /// Body rejected before deserialization (too large, wrong content type).
    #[error("{1}")]
    Rejected(StatusCode, String),
    #[error("unexpected request ({0})")]
    Unexpected(StatusCode),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(vec![message.into()])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                tracing::warn!(?errors, "rejected request");
                (StatusCode::BAD_REQUEST, Json(errors_body(errors))).into_response()
            }
            AppError::BadRequest(message) => {
                tracing::warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, Json(error_body(message))).into_response()
            }
            AppError::Rejected(status, message) => {
                tracing::warn!(%status, %message, "body rejected");
                (status, Json(error_body(message))).into_response()
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, Json(error_body(message))).into_response(),
            AppError::Unexpected(status) => (status, Json(error_body(UNEXPECTED_MESSAGE))).into_response(),
            AppError::Db(sqlx::Error::RowNotFound) => {
                (StatusCode::NOT_FOUND, Json(error_body("not found"))).into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error_body("database error"))).into_response()
            }
            AppError::Config(e) => {
                tracing::error!(error = %e, "config error");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error_body(e.to_string()))).into_response()
            }
        }
    }
}
