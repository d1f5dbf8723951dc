use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use railway_booking::timetable::Train;
use serde::Deserialize;

use crate::error::ApiError;
use crate::extractors::extract_query;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TrainsQuery {
    source: String,
    destination: String,
}

pub async fn trains_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TrainsQuery>, QueryRejection>,
) -> Result<Json<Vec<Train>>, ApiError> {
    let query = extract_query(query)?;
    let network = state.network.snapshot();
    network
        .cities()
        .resolve_pair(&query.source, &query.destination)?;

    Ok(Json(
        state
            .bookings
            .timetable()
            .trains_between(&query.source, &query.destination),
    ))
}
