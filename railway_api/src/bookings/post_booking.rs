use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use railway_booking::booking::{Booking, BookingRequest};

use crate::error::ApiError;
use crate::extractors::extract_json;
use crate::state::AppState;

pub async fn post_booking_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let body = extract_json(body)?;
    let network = state.network.snapshot();
    let booking = state.bookings.book(&network, body).await?;

    Ok((StatusCode::CREATED, Json(booking)))
}
