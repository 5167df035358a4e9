//! Activity handlers: list, read, delete.

use super::parse_id;
use crate::error::AppError;
use crate::response::ok;
use crate::service::ActivityService;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
};

const NOT_FOUND: &str = "Activity not found";

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let activities = ActivityService::list(&state.pool).await?;
    Ok(ok(activities))
}

pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(path, NOT_FOUND)?;
    let activity = ActivityService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(ok(activity))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(path, NOT_FOUND)?;
    if !ActivityService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
