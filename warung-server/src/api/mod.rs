//! API route modules
//!
//! Each module owns its routes under `/api/...` and a `handler.rs` with
//! the request handlers.

pub mod auth;
pub mod health;
pub mod products;
pub mod promos;
pub mod sales;
pub mod settings;
pub mod staff;
pub mod sync;

use crate::core::ServerState;
use axum::Router;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Role, StoredSession};

/// Reject when nobody is logged in
pub(crate) fn require_session(state: &ServerState) -> AppResult<StoredSession> {
    state.sessions.current().ok_or_else(AppError::unauthorized)
}

/// Reject unless the active session is an admin
pub(crate) fn require_admin(state: &ServerState) -> AppResult<StoredSession> {
    let session = require_session(state)?;
    if session.role != Role::Admin {
        return Err(AppError::new(ErrorCode::AdminRequired));
    }
    Ok(session)
}

/// The complete API router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(auth::router())
        .merge(health::router())
        .merge(products::router())
        .merge(promos::router())
        .merge(sales::router())
        .merge(settings::router())
        .merge(staff::router())
        .merge(sync::router())
}
