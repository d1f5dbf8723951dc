use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use tracing::warn;

use crate::admin::SuccessResponse;
use crate::error::ApiError;
use crate::extractors::extract_json;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    password: Option<String>,
}

pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let password = extract_json(body)?
        .password
        .filter(|password| !password.is_empty())
        .ok_or_else(|| ApiError::BadRequest(String::from("Password required")))?;

    if !state.credentials.verify(&password) {
        warn!("rejected admin login");
        return Err(ApiError::Unauthorized(String::from("Invalid password")));
    }

    Ok(Json(SuccessResponse::new(None)))
}
