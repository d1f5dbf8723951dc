//! Body and query extraction that reports malformed input as [`ApiError`].
//!
//! Handlers take `Result<Json<T>, JsonRejection>` so a body axum cannot decode
//! still answers with the `{"error": ...}` shape instead of axum's plain-text
//! rejection.

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};

use crate::error::ApiError;

pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    result
        .map(|Json(value)| value)
        .map_err(|err| ApiError::BadRequest(err.body_text()))
}

pub fn extract_query<T>(result: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    result
        .map(|Query(value)| value)
        .map_err(|err| ApiError::BadRequest(err.body_text()))
}
