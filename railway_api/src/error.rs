use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use railway_booking::error::BookingError;
use railway_routing::error::RoutingError;
use serde_json::json;
use tracing::{error, warn};

use crate::admin::password_store::CredentialError;

pub const INVALID_MATRIX_VALUES: &str = "Matrix values must be non-negative numbers";

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    InternalServerError(String),
    NotFound(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<RoutingError> for ApiError {
    fn from(error: RoutingError) -> Self {
        match error {
            RoutingError::UnknownCity(_) => ApiError::BadRequest(String::from("Invalid city names")),
            RoutingError::NegativeWeight { .. } | RoutingError::NonFiniteWeight { .. } => {
                warn!("rejected matrix: {}", error);
                ApiError::BadRequest(String::from(INVALID_MATRIX_VALUES))
            }
            RoutingError::CityCountMismatch { .. } => {
                ApiError::InternalServerError(error.to_string())
            }
            _ => ApiError::BadRequest(error.to_string()),
        }
    }
}

impl From<BookingError> for ApiError {
    fn from(error: BookingError) -> Self {
        match error {
            BookingError::Routing(error) => error.into(),
            _ => ApiError::BadRequest(error.to_string()),
        }
    }
}

impl From<CredentialError> for ApiError {
    fn from(error: CredentialError) -> Self {
        match error {
            CredentialError::TooShort { .. } => ApiError::BadRequest(error.to_string()),
            CredentialError::Io(_) | CredentialError::Serde(_) => {
                ApiError::InternalServerError(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(message) => {
                error!("{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
