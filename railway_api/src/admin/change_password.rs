use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use crate::admin::SuccessResponse;
use crate::error::ApiError;
use crate::extractors::extract_json;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordBody {
    #[serde(default)]
    new_password: String,
}

pub async fn change_password_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChangePasswordBody>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let body = extract_json(body)?;
    state.credentials.change(&body.new_password)?;

    Ok(Json(SuccessResponse::new(Some(
        "Password changed successfully",
    ))))
}
