//! HTTP handlers for campers, activities, and signups.

pub mod activities;
pub mod campers;
pub mod signups;

use crate::error::AppError;
use axum::extract::{rejection::PathRejection, Path};
use axum::http::StatusCode;

/// Ids that do not parse as integers are treated like unknown ids.
fn parse_id(path: Result<Path<i64>, PathRejection>, not_found: &str) -> Result<i64, AppError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(_) => Err(AppError::NotFound(not_found.to_string())),
    }
}

/// Method fallback for routes whose unsupported verbs answer with `status`.
pub(crate) fn unexpected(status: StatusCode) -> AppError {
    tracing::warn!(%status, "unsupported method");
    AppError::Unexpected(status)
}
