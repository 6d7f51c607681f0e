//! Sales and checkout API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/sales", get(handler::list))
        .route("/api/sales/summary", get(handler::summary))
        .route("/api/sales/{id}", get(handler::get_by_id))
        .route("/api/checkout", post(handler::checkout))
}
