use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct CitiesResponse {
    cities: Vec<String>,
}

pub async fn cities_handler(State(state): State<Arc<AppState>>) -> Json<CitiesResponse> {
    let network = state.network.snapshot();

    Json(CitiesResponse {
        cities: network.cities().names().to_vec(),
    })
}
