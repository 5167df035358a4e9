//! Camper handlers: list, create, read, update.

use super::{parse_id, unexpected};
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::NewCamper;
use crate::response::{accepted, ok};
use crate::service::{CamperService, CamperUpdate, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Map, Value};

const NOT_FOUND: &str = "Camper not found";

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let campers = CamperService::list(&state.pool).await?;
    Ok(ok(campers))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewCamper>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate_age(body.age)?;
    let camper = CamperService::create(&state.pool, &body).await?;
    Ok(ok(camper))
}

pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(path, NOT_FOUND)?;
    let camper = CamperService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(ok(camper))
}

/// PATCH: the id is resolved before the body is looked at, so an unknown id is a 404
/// whatever the payload (missing, malformed, or with invalid keys).
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<JsonBody<Map<String, Value>>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(path, NOT_FOUND)?;
    if !CamperService::exists(&state.pool, id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    let JsonBody(body) = body?;
    let changes: CamperUpdate = RequestValidator::camper_fields(&body)?.into_iter().collect();
    let camper = CamperService::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(accepted(camper))
}

pub async fn collection_fallback() -> AppError {
    unexpected(StatusCode::NOT_FOUND)
}

pub async fn member_fallback() -> AppError {
    unexpected(StatusCode::INTERNAL_SERVER_ERROR)
}
