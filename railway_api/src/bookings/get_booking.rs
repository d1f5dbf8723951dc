use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use railway_booking::booking::Booking;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_booking_handler(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Booking>, ApiError> {
    state
        .bookings
        .ledger()
        .get(&booking_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Booking {booking_id} not found")))
}
