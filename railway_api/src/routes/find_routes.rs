use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use railway_routing::routing::route_option::RouteOption;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::extractors::extract_json;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FindRoutesBody {
    source: String,
    destination: String,
}

pub async fn find_routes_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<FindRoutesBody>, JsonRejection>,
) -> Result<Json<Vec<RouteOption>>, ApiError> {
    let body = extract_json(body)?;
    let network = state.network.snapshot();
    let routes = network.find_routes(&body.source, &body.destination)?;

    if routes.is_empty() {
        return Err(ApiError::NotFound(String::from("No routes found")));
    }

    info!(
        "found {} routes from {} to {}",
        routes.len(),
        body.source,
        body.destination
    );

    Ok(Json(routes))
}
