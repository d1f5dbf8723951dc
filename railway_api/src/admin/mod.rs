pub mod change_password;
pub mod graph;
pub mod login;
pub mod password_store;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct SuccessResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

impl SuccessResponse {
    pub fn new(message: Option<&'static str>) -> Self {
        SuccessResponse {
            success: true,
            message,
        }
    }
}

pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/graph",
            get(graph::get_graph_handler).post(graph::post_graph_handler),
        )
        .route("/login", post(login::login_handler))
        .route(
            "/change-password",
            post(change_password::change_password_handler),
        )
}
