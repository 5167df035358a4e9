//! Response helpers. Successful responses carry the serialized entity directly; failures
//! carry either a single `error` message or an `errors` list.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize, Debug)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn accepted<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::ACCEPTED, Json(data))
}

pub fn error_body(message: impl Into<String>) -> ErrorBody {
    ErrorBody {
        error: message.into(),
    }
}

pub fn errors_body(errors: Vec<String>) -> ErrorsBody {
    ErrorsBody { errors }
}
