pub mod admin;
mod bookings;
pub mod config;
pub mod error;
mod extractors;
mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::admin::admin_routes;
use crate::bookings::{get_booking::get_booking_handler, post_booking::post_booking_handler};
use crate::routes::{
    cities::cities_handler, find_routes::find_routes_handler, trains::trains_handler,
};
use crate::state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/cities", get(cities_handler))
        .route("/routes/find", post(find_routes_handler))
        .route("/trains", get(trains_handler))
        .route("/bookings", post(post_booking_handler))
        .route("/bookings/{booking_id}", get(get_booking_handler))
        .nest("/admin", admin_routes());

    Router::new()
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(state)
}
