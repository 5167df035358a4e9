//! Signup handlers: list, create.

use super::unexpected;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::NewSignup;
use crate::response::ok;
use crate::service::{RequestValidator, SignupService};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let signups = SignupService::list(&state.pool).await?;
    Ok(ok(signups))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewSignup>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate_time(body.time)?;
    let signup = SignupService::create(&state.pool, &body).await?;
    Ok(ok(signup))
}

pub async fn collection_fallback() -> AppError {
    unexpected(StatusCode::BAD_REQUEST)
}
